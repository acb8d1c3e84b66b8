//! Figlet text rendering behind the `TextRenderer` seam.
//!
//! The embedded standard font is parsed once at construction and doubles as
//! the fallback font. Every other catalog font resolves to a `<name>.flf`
//! file probed across the conventional figlet font directories, loaded per
//! render call. The session layer owns the fallback policy; this module only
//! reports precise failures.

use crate::catalog;
use crate::error::RenderError;
use figlet_rs::FIGfont;
use std::path::{Path, PathBuf};

/// Contract for the text-to-block-art collaborator.
pub trait TextRenderer {
    /// Render `text` in the named font. Deterministic for a given pair.
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError>;
}

/// Directories probed for `<font>.flf` files, in order.
const FONT_DIRS: &[&str] = &[
    "/usr/share/figlet",
    "/usr/share/figlet/fonts",
    "/usr/local/share/figlet",
    "/opt/homebrew/share/figlet/fonts",
];

/// figlet-rs-backed production renderer.
pub struct FigletRenderer {
    standard: FIGfont,
    font_dirs: Vec<PathBuf>,
}

impl FigletRenderer {
    /// Build a renderer probing the conventional system font directories.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_font_dirs(FONT_DIRS.iter().map(PathBuf::from).collect())
    }

    /// Build a renderer with an explicit font-directory list.
    pub fn with_font_dirs(font_dirs: Vec<PathBuf>) -> Result<Self, RenderError> {
        let standard = FIGfont::standard().map_err(RenderError::Font)?;
        Ok(Self {
            standard,
            font_dirs,
        })
    }

    /// Locate the `.flf` file for `font`, if any configured directory has it.
    pub fn resolve_font_path(&self, font: &str) -> Option<PathBuf> {
        if !is_plain_font_name(font) {
            return None;
        }
        self.font_dirs
            .iter()
            .map(|dir| dir.join(format!("{font}.flf")))
            .find(|candidate| candidate.is_file())
    }

    fn load_named_font(&self, font: &str) -> Result<FIGfont, RenderError> {
        let path = self
            .resolve_font_path(font)
            .ok_or_else(|| RenderError::UnknownFont(font.to_string()))?;
        load_font_file(&path)
    }
}

impl TextRenderer for FigletRenderer {
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError> {
        let named_font;
        let figure = if font == catalog::DEFAULT_FONT {
            self.standard.convert(text)
        } else {
            named_font = self.load_named_font(font)?;
            named_font.convert(text)
        };
        figure
            .map(|art| art.to_string())
            .ok_or_else(|| RenderError::Unrenderable(text.to_string()))
    }
}

fn load_font_file(path: &Path) -> Result<FIGfont, RenderError> {
    let path_text = path
        .to_str()
        .ok_or_else(|| RenderError::Font(format!("non-UTF-8 font path {path:?}")))?;
    FIGfont::from_file(path_text).map_err(RenderError::Font)
}

/// Font names index into files, so only accept plain identifiers.
fn is_plain_font_name(font: &str) -> bool {
    !font.is_empty()
        && font
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn renderer_without_font_dirs() -> FigletRenderer {
        FigletRenderer::with_font_dirs(Vec::new()).expect("embedded standard font parses")
    }

    #[test]
    fn standard_font_renders_text() {
        let renderer = renderer_without_font_dirs();
        let art = renderer.render("Hi", "standard").expect("renders");
        assert!(art.lines().count() > 1, "figlet output is multi-line");
        assert!(!art.trim().is_empty());
    }

    #[test]
    fn rendering_is_deterministic_for_same_pair() {
        let renderer = renderer_without_font_dirs();
        let first = renderer.render("Hello World", "standard").unwrap();
        let second = renderer.render("Hello World", "standard").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn named_font_without_font_file_is_unknown() {
        let renderer = renderer_without_font_dirs();
        match renderer.render("Hi", "doom") {
            Err(RenderError::UnknownFont(name)) => assert_eq!(name, "doom"),
            other => panic!("expected UnknownFont, got {other:?}"),
        }
    }

    #[test]
    fn malformed_font_file_reports_font_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doom.flf"), "not a figlet font").unwrap();
        let renderer =
            FigletRenderer::with_font_dirs(vec![dir.path().to_path_buf()]).unwrap();
        match renderer.render("Hi", "doom") {
            Err(RenderError::Font(_)) => {}
            other => panic!("expected Font error, got {other:?}"),
        }
    }

    #[test]
    fn font_names_with_path_separators_are_rejected() {
        let renderer = renderer_without_font_dirs();
        assert!(renderer.resolve_font_path("../etc/passwd").is_none());
        assert!(renderer.resolve_font_path("").is_none());
    }
}
