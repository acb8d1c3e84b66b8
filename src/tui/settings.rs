//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak banner text, menu copy, prompt strings,
//! panel glyphs, colors, spinner behavior, and cosmetic pause durations.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const FALLBACK_COLUMNS: usize = 100;
pub const PANEL_RIGHT_MARGIN: usize = 2;
pub const PANEL_PADDING: usize = 1;
pub const RULE_LEAD_WIDTH: usize = 3;

// ---------------------------------------------------------------------------
// Banner
// ---------------------------------------------------------------------------

pub const BANNER_TEXT: &str = "ASCII ART";
pub const BANNER_FONT: &str = "slant";
pub const BANNER_TITLE: &str = "ASCII Art Generator";
pub const BANNER_SUBTITLE: &str = "Turn text into art, the fun way";

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

pub const MAIN_MENU_TITLE: &str = "Main Menu";
pub const MAIN_MENU_ROWS: &[(&str, &str)] = &[
    ("1", "Create ASCII art from text"),
    ("2", "Get a random ASCII art surprise"),
    ("3", "Exit"),
];
pub const MAIN_MENU_QUESTION: &str = "What would you like to do?";

pub const FONT_MENU_TITLE: &str = "Font Styles";
pub const FONT_RULE_LABEL: &str = "Pick a Style";

pub const TEXT_RULE_LABEL: &str = "Your Text";
pub const TEXT_QUESTION: &str = "What text do you want to turn into ASCII art?";
pub const TEXT_DEFAULT: &str = "Hello World";

pub const PREVIEW_TITLE: &str = "Here's Your ASCII Art";

pub const ACTION_MENU_TITLE: &str = "Next Steps";
pub const ACTION_MENU_ROWS: &[(&str, &str)] = &[
    ("1", "Copy to clipboard"),
    ("2", "Make another one"),
    ("3", "Back to main menu"),
    ("4", "Exit"),
];
pub const ACTION_MENU_QUESTION: &str = "Choose what to do next";

// ---------------------------------------------------------------------------
// Status messages
// ---------------------------------------------------------------------------

pub const MSG_NOT_A_NUMBER: &str = "Please enter a number, not text.";
pub const MSG_OUT_OF_RANGE: &str = "Invalid number. Try again!";
pub const MSG_BAD_CHOICE: &str = "Please select one of the available options.";
pub const MSG_EMPTY_TEXT: &str = "Oops! Looks like you didn't enter anything.";
pub const MSG_COPY_OK: &str = "Your ASCII art is now on the clipboard!";
pub const MSG_FAREWELL: &str = "Thanks for using the ASCII Art Generator!";
pub const MSG_FAREWELL_SUB: &str = "See you next time";
pub const MSG_CANCELLED: &str = "Cancelled. No worries!";
pub const MSG_NOT_A_TERMINAL: &str = "This tool is meant to run in a terminal.";

pub const GLYPH_SUCCESS: &str = "✓";
pub const GLYPH_ERROR: &str = "✗";
pub const GLYPH_WARNING: &str = "!";

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_DEFAULT_OPEN: &str = " [";
pub const PROMPT_DEFAULT_CLOSE: &str = "]";
pub const PROMPT_SUFFIX: &str = ": ";

// ---------------------------------------------------------------------------
// Spinner / pacing
// ---------------------------------------------------------------------------

pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_CLEAR_LINE: &str = "\r\x1b[2K";

pub const LABEL_RENDERING: &str = "Creating ASCII art...";
pub const LABEL_RANDOM: &str = "Generating something random...";
pub const LABEL_COPYING: &str = "Copying to clipboard...";

// Cosmetic pauses: pure UX illusion around instantaneous calls.
pub const PAUSE_RENDER_MS: u64 = 500;
pub const PAUSE_RANDOM_MS: u64 = 800;
pub const PAUSE_SETTLE_MS: u64 = 300;
pub const PAUSE_COPY_MS: u64 = 1000;
pub const PAUSE_COPIED_MS: u64 = 500;

// ---------------------------------------------------------------------------
// Panel glyphs (rounded, rich-terminal style)
// ---------------------------------------------------------------------------

pub const PANEL_TOP_LEFT: char = '╭';
pub const PANEL_TOP_RIGHT: char = '╮';
pub const PANEL_BOTTOM_LEFT: char = '╰';
pub const PANEL_BOTTOM_RIGHT: char = '╯';
pub const PANEL_HORIZONTAL: char = '─';
pub const PANEL_VERTICAL: char = '│';

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_ACCENT: Color = Color::Cyan;
pub const COLOR_BORDER: Color = Color::Blue;
pub const COLOR_PREVIEW_BORDER: Color = Color::Green;
pub const COLOR_SUBTITLE: Color = Color::DarkGrey;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_DEFAULT_HINT: Color = Color::DarkGrey;
pub const COLOR_SPINNER_FRAME: Color = Color::Cyan;
pub const COLOR_SPINNER_LABEL: Color = Color::Grey;
