//! Fixed art catalogs: font names, decorative patterns, exclamation words.
//!
//! All three tables are immutable for the process lifetime. Selection is
//! always by index (menus) or uniform random draw (the surprise flow).

/// Figlet font identifiers offered in the font menu, in display order.
pub const FONTS: &[&str] = &[
    "slant",
    "block",
    "standard",
    "digital",
    "big",
    "small",
    "banner",
    "doom",
    "ghost",
    "gothic",
    "graffiti",
    "isometric1",
    "larry3d",
    "mini",
    "script",
    "shadow",
    "speed",
    "starwars",
];

/// Fallback font used when a named font fails to render.
pub const DEFAULT_FONT: &str = "standard";

/// Decorative glyph rows sampled by the surprise flow.
pub const PATTERNS: &[&str] = &[
    "★ ☆ ★ ☆ ★ ☆ ★ ☆ ★ ☆",
    "◆ ◇ ◆ ◇ ◆ ◇ ◆ ◇ ◆ ◇",
    "▲ ▼ ▲ ▼ ▲ ▼ ▲ ▼ ▲ ▼",
    "♦ ♢ ♦ ♢ ♦ ♢ ♦ ♢ ♦ ♢",
    "▒░▒░▒░▒░▒░▒░▒░▒░▒░▒░",
    "═══════════════════════",
    "┌─┬─┬─┬─┬─┬─┬─┬─┬─┬─┐",
    "╔═╦═╦═╦═╦═╦═╦═╦═╦═╦═╗",
];

/// Exclamation words rendered by the surprise flow.
pub const WORDS: &[&str] = &["AWESOME", "COOL", "AMAZING", "GREAT", "NICE", "WOW"];

/// Resolve a 1-based menu selection to a font name.
///
/// Returns `None` when `choice` is zero or past the end of the catalog.
pub fn font_by_menu_index(choice: usize) -> Option<&'static str> {
    if choice == 0 {
        return None;
    }
    FONTS.get(choice - 1).copied()
}
