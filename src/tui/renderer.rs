//! Screen-level terminal output: banner, menus, preview, status lines.
//!
//! Panels and art go to stdout; the prompt/spinner channel is stderr. Color
//! is a single toggle decided at startup and threaded through every print.

use crate::tui::panel::{Panel, PanelRow};
use crate::tui::settings;
use crate::tui::text::pad_to_width;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::Command;

/// Stateless output surface with a color toggle.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    fn columns(&self) -> usize {
        terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(settings::FALLBACK_COLUMNS)
    }

    /// Clear the display surface and home the cursor.
    pub fn clear_screen(&self) {
        let mut ansi = String::new();
        let _ = Clear(ClearType::All).write_ansi(&mut ansi);
        let _ = MoveTo(0, 0).write_ansi(&mut ansi);
        print!("{ansi}");
    }

    /// Title banner: centered block art with the app title and tagline.
    pub fn banner(&self, banner_art: &str) {
        let panel = Panel::from_text(banner_art.trim_end())
            .with_title(settings::BANNER_TITLE)
            .with_subtitle(settings::BANNER_SUBTITLE)
            .centered();
        self.print_panel(&panel, settings::COLOR_BORDER);
        println!();
    }

    pub fn main_menu(&self) {
        self.menu_panel(settings::MAIN_MENU_TITLE, settings::MAIN_MENU_ROWS);
    }

    pub fn action_menu(&self) {
        self.menu_panel(settings::ACTION_MENU_TITLE, settings::ACTION_MENU_ROWS);
    }

    fn menu_panel(&self, title: &str, rows: &[(&str, &str)]) {
        let lines: Vec<String> = rows
            .iter()
            .map(|(option, description)| format!("{option}  {description}"))
            .collect();
        self.print_panel(&Panel::new(lines).with_title(title), settings::COLOR_BORDER);
    }

    /// Two-column numbered font list, consecutive numbers within a row.
    pub fn font_menu(&self, fonts: &[&str]) {
        let entry = |idx: usize, name: &str| format!("{:2}. {name}", idx + 1);
        let left_width = fonts
            .iter()
            .step_by(2)
            .enumerate()
            .map(|(row, name)| entry(row * 2, name).chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for i in (0..fonts.len()).step_by(2) {
            let left = entry(i, fonts[i]);
            let line = match fonts.get(i + 1) {
                Some(right) => format!("{}    {}", pad_to_width(&left, left_width), entry(i + 1, right)),
                None => left,
            };
            lines.push(line);
        }
        self.print_panel(
            &Panel::new(lines).with_title(settings::FONT_MENU_TITLE),
            settings::COLOR_BORDER,
        );
    }

    /// Bordered preview area around the generated art.
    pub fn preview(&self, art: &str) {
        println!();
        let panel = Panel::from_text(art.trim_end()).with_title(settings::PREVIEW_TITLE);
        self.print_panel(&panel, settings::COLOR_PREVIEW_BORDER);
    }

    /// Section rule: a labeled horizontal line.
    pub fn rule(&self, label: &str) {
        let width = self.columns().saturating_sub(settings::PANEL_RIGHT_MARGIN);
        let lead: String = std::iter::repeat(settings::PANEL_HORIZONTAL)
            .take(settings::RULE_LEAD_WIDTH)
            .collect();
        let head = format!("{lead} {label} ");
        let fill_len = width.saturating_sub(head.chars().count());
        let fill: String = std::iter::repeat(settings::PANEL_HORIZONTAL)
            .take(fill_len)
            .collect();
        if self.color {
            println!("{}", format!("{head}{fill}").with(settings::COLOR_ACCENT));
        } else {
            println!("{head}{fill}");
        }
    }

    pub fn success(&self, message: &str) {
        self.status(settings::GLYPH_SUCCESS, message, settings::COLOR_SUCCESS);
    }

    pub fn error(&self, message: &str) {
        self.status(settings::GLYPH_ERROR, message, settings::COLOR_ERROR);
    }

    pub fn warning(&self, message: &str) {
        self.status(settings::GLYPH_WARNING, message, settings::COLOR_WARNING);
    }

    pub fn farewell(&self) {
        println!();
        if self.color {
            println!(
                "{}",
                settings::MSG_FAREWELL.with(settings::COLOR_ACCENT).bold()
            );
            println!(
                "{}",
                settings::MSG_FAREWELL_SUB.with(settings::COLOR_SUBTITLE)
            );
        } else {
            println!("{}", settings::MSG_FAREWELL);
            println!("{}", settings::MSG_FAREWELL_SUB);
        }
        println!();
    }

    pub fn cancelled(&self) {
        println!();
        if self.color {
            println!(
                "{}",
                settings::MSG_CANCELLED.with(settings::COLOR_WARNING).bold()
            );
            println!(
                "{}",
                settings::MSG_FAREWELL_SUB.with(settings::COLOR_SUBTITLE)
            );
        } else {
            println!("{}", settings::MSG_CANCELLED);
            println!("{}", settings::MSG_FAREWELL_SUB);
        }
        println!();
    }

    fn status(&self, glyph: &str, message: &str, color: Color) {
        if self.color {
            println!("{}", format!("{glyph} {message}").with(color).bold());
        } else {
            println!("{glyph} {message}");
        }
    }

    fn print_panel(&self, panel: &Panel, border: Color) {
        let vertical = settings::PANEL_VERTICAL;
        for row in panel.rows(self.columns()) {
            match row {
                PanelRow::Edge(line) => {
                    if self.color {
                        println!("{}", line.with(border));
                    } else {
                        println!("{line}");
                    }
                }
                PanelRow::Body(body) => {
                    if self.color {
                        let side = format!("{vertical}").with(border);
                        println!("{side}{body}{side}");
                    } else {
                        println!("{vertical}{body}{vertical}");
                    }
                }
            }
        }
    }
}
