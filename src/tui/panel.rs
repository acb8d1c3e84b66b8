//! Bordered panel layout.
//!
//! Panels are computed as plain rows so layout stays testable; the renderer
//! decides how edges and bodies are styled when printing. Width fits the
//! content and is capped at the caller-provided terminal width.

use crate::tui::settings;
use crate::tui::text::{center_in_width, clip_to_width, pad_to_width, visible_width};

/// One printable panel row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    /// Top or bottom border, label already embedded. Printed in border color.
    Edge(String),
    /// Inner body padded to the panel's inner width, without side borders.
    Body(String),
}

/// A bordered panel with optional title/subtitle labels.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    title: Option<String>,
    subtitle: Option<String>,
    centered: bool,
    lines: Vec<String>,
}

impl Panel {
    pub fn new<S: Into<String>, L: IntoIterator<Item = S>>(lines: L) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string))
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Compute the printable rows for a terminal `max_width` columns wide.
    pub fn rows(&self, max_width: usize) -> Vec<PanelRow> {
        let inner = self.inner_width(max_width);
        let mut rows = Vec::with_capacity(self.lines.len() + 2);

        rows.push(PanelRow::Edge(edge_line(
            settings::PANEL_TOP_LEFT,
            settings::PANEL_TOP_RIGHT,
            self.title.as_deref(),
            inner,
        )));

        let content_width = inner.saturating_sub(2 * settings::PANEL_PADDING);
        for line in &self.lines {
            let clipped = clip_to_width(line, content_width);
            let aligned = if self.centered {
                center_in_width(&clipped, content_width)
            } else {
                pad_to_width(&clipped, content_width)
            };
            let pad = " ".repeat(settings::PANEL_PADDING);
            rows.push(PanelRow::Body(format!("{pad}{aligned}{pad}")));
        }

        rows.push(PanelRow::Edge(edge_line(
            settings::PANEL_BOTTOM_LEFT,
            settings::PANEL_BOTTOM_RIGHT,
            self.subtitle.as_deref(),
            inner,
        )));

        rows
    }

    fn inner_width(&self, max_width: usize) -> usize {
        let content = self
            .lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0);
        // Labels need breathing room inside the border run.
        let label = self
            .title
            .iter()
            .chain(self.subtitle.iter())
            .map(|l| visible_width(l) + 4)
            .max()
            .unwrap_or(0);
        let wanted = (content + 2 * settings::PANEL_PADDING).max(label);
        let cap = max_width.saturating_sub(2 + settings::PANEL_RIGHT_MARGIN);
        wanted.min(cap).max(2)
    }
}

fn edge_line(left: char, right: char, label: Option<&str>, inner: usize) -> String {
    let mut fill: Vec<char> = std::iter::repeat(settings::PANEL_HORIZONTAL)
        .take(inner)
        .collect();

    if let Some(label) = label {
        let text = format!(" {label} ");
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= inner {
            let start = (inner - chars.len()) / 2;
            fill[start..start + chars.len()].copy_from_slice(&chars);
        }
    }

    let mut row = String::with_capacity(inner + 2);
    row.push(left);
    row.extend(fill);
    row.push(right);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_width(row: &PanelRow) -> usize {
        match row {
            PanelRow::Edge(s) => visible_width(s),
            PanelRow::Body(s) => visible_width(s) + 2,
        }
    }

    #[test]
    fn all_rows_share_one_width() {
        let panel = Panel::new(["one", "a longer middle line", "x"])
            .with_title("Demo")
            .with_subtitle("sub");
        let rows = panel.rows(80);
        let width = row_width(&rows[0]);
        assert!(rows.iter().all(|r| row_width(r) == width), "rows: {rows:?}");
    }

    #[test]
    fn title_and_subtitle_are_embedded_in_edges() {
        let panel = Panel::new(["body"]).with_title("Top").with_subtitle("Bottom");
        let rows = panel.rows(80);
        match (&rows[0], rows.last().unwrap()) {
            (PanelRow::Edge(top), PanelRow::Edge(bottom)) => {
                assert!(top.contains(" Top "), "top edge: {top}");
                assert!(bottom.contains(" Bottom "), "bottom edge: {bottom}");
                assert!(top.starts_with('╭') && top.ends_with('╮'));
                assert!(bottom.starts_with('╰') && bottom.ends_with('╯'));
            }
            other => panic!("unexpected edges: {other:?}"),
        }
    }

    #[test]
    fn long_lines_are_clipped_at_terminal_width() {
        let long = "x".repeat(300);
        let rows = Panel::new([long]).rows(40);
        assert!(rows.iter().all(|r| row_width(r) <= 40));
    }

    #[test]
    fn centered_panel_centers_short_lines() {
        let panel = Panel::new(["mid", "a much wider content line"]).centered();
        let rows = panel.rows(80);
        let PanelRow::Body(body) = &rows[1] else {
            panic!("expected body row");
        };
        assert!(body.starts_with("  "), "centered body: {body:?}");
        assert!(body.contains("mid"));
    }

    #[test]
    fn empty_panel_still_renders_edges() {
        let rows = Panel::new(Vec::<String>::new()).rows(80);
        assert_eq!(rows.len(), 2);
    }
}
