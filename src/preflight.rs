//! Startup capability probes for the renderer and clipboard collaborators.
//!
//! These checks run before the menu loop to surface missing capabilities as
//! actionable messages instead of mid-session surprises. The renderer probe
//! is fatal (the fallback path depends on the embedded font); the clipboard
//! probe only warns, because copy failures are recovered at the action menu.

use crate::catalog::FONTS;
use crate::clipboard;
use crate::figlet::FigletRenderer;

/// Construct the production renderer, failing with remediation guidance.
pub fn renderer_ready() -> Result<FigletRenderer, String> {
    FigletRenderer::new().map_err(|e| {
        format!(
            "The text renderer failed to start: {e}. \
             The default figlet font ships inside the binary; reinstall artsy if this persists."
        )
    })
}

/// Count catalog fonts that resolve to a font file on this host.
pub fn named_fonts_found(renderer: &FigletRenderer) -> usize {
    FONTS
        .iter()
        .filter(|font| renderer.resolve_font_path(font).is_some())
        .count()
}

/// Non-fatal findings to print before the session starts.
pub fn advisory_warnings(renderer: &FigletRenderer) -> Vec<String> {
    let found = named_fonts_found(renderer);
    tracing::debug!(found, "named figlet fonts resolved");

    let mut warnings = Vec::new();
    if let Some(warning) = font_availability_warning(found) {
        warnings.push(warning);
    }
    if let Err(e) = clipboard::probe() {
        tracing::debug!(error = %e, "clipboard probe failed");
        warnings.push(format!(
            "{e}; copy actions will report an error until a clipboard is available."
        ));
    }
    warnings
}

fn font_availability_warning(found: usize) -> Option<String> {
    if found > 0 {
        return None;
    }
    Some(
        "No figlet font files found on this host; every style will fall back \
         to the default font. Install the `figlet` package to get the full catalog."
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_probe_succeeds_with_embedded_font() {
        assert!(renderer_ready().is_ok());
    }

    #[test]
    fn no_named_fonts_resolve_without_font_dirs() {
        let renderer = FigletRenderer::with_font_dirs(Vec::new()).unwrap();
        assert_eq!(named_fonts_found(&renderer), 0);
    }

    #[test]
    fn font_warning_only_fires_when_nothing_resolves() {
        let warning = font_availability_warning(0).expect("warning expected");
        assert!(warning.contains("fall back"), "warning: {warning}");
        assert!(font_availability_warning(1).is_none());
        assert!(font_availability_warning(18).is_none());
    }

    #[test]
    fn named_fonts_found_counts_resolvable_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doom.flf"), "stub").unwrap();
        std::fs::write(dir.path().join("mini.flf"), "stub").unwrap();
        let renderer = FigletRenderer::with_font_dirs(vec![dir.path().to_path_buf()]).unwrap();
        // Resolution only checks presence; parsing happens at render time.
        assert_eq!(named_fonts_found(&renderer), 2);
    }
}
