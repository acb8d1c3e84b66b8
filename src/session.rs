//! The interactive session controller.
//!
//! Owns the current art buffer and sequences the whole dialogue: main menu,
//! text flow, surprise flow, and the post-art action menu. Menu outcomes are
//! explicit enums returned up through the flow functions; the only process
//! exits live in `main`.

use crate::catalog::{self, DEFAULT_FONT, FONTS, PATTERNS, WORDS};
use crate::clipboard::ClipboardWriter;
use crate::error::SessionError;
use crate::figlet::TextRenderer;
use crate::tui::progress::{pause_ms, start_progress};
use crate::tui::{settings, Prompter, Renderer};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::io::BufRead;

/// Selection made at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    TextArt,
    RandomArt,
    Exit,
}

impl MainChoice {
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "1" => Some(Self::TextArt),
            "2" => Some(Self::RandomArt),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Selection made at the post-art action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    Copy,
    Another,
    Back,
    Exit,
}

impl ActionChoice {
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "1" => Some(Self::Copy),
            "2" => Some(Self::Another),
            "3" => Some(Self::Back),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How a flow hands control back to the top-level loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Back,
    Exit,
}

/// Where the action-menu loop settles once copy actions are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterArt {
    Another,
    Back,
    Exit,
}

/// Ingredients drawn for one surprise-flow sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPieces {
    pub patterns: [&'static str; 5],
    pub word: &'static str,
    pub font: &'static str,
}

/// Draw the surprise-flow ingredients: five pattern rows sampled with
/// replacement, one exclamation word, one font.
pub fn draw_random_pieces(rng: &mut dyn RngCore) -> RandomPieces {
    let mut patterns = [""; 5];
    for slot in patterns.iter_mut() {
        *slot = PATTERNS.choose(&mut *rng).copied().unwrap_or(PATTERNS[0]);
    }
    RandomPieces {
        patterns,
        word: WORDS.choose(&mut *rng).copied().unwrap_or(WORDS[0]),
        font: FONTS.choose(&mut *rng).copied().unwrap_or(DEFAULT_FONT),
    }
}

/// Join the five pattern rows and the rendered word into one art buffer.
pub fn compose_random_art(patterns: &[&str], word_art: &str) -> String {
    let mut segments: Vec<&str> = patterns.to_vec();
    segments.push(word_art);
    segments.join("\n")
}

/// The interactive session: collaborators in, exit outcome back.
pub struct Session<R, C, I> {
    figlet: R,
    clipboard: C,
    prompter: Prompter<I>,
    ui: Renderer,
    rng: Box<dyn RngCore>,
    art: String,
}

impl<R, C, I> Session<R, C, I>
where
    R: TextRenderer,
    C: ClipboardWriter,
    I: BufRead,
{
    pub fn new(figlet: R, clipboard: C, input: I, ui: Renderer) -> Self {
        Self::with_rng(figlet, clipboard, input, ui, Box::new(rand::thread_rng()))
    }

    /// Injectable RNG constructor used by tests for deterministic draws.
    pub fn with_rng(
        figlet: R,
        clipboard: C,
        input: I,
        ui: Renderer,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let color = ui.color();
        Self {
            figlet,
            clipboard,
            prompter: Prompter::new(input, color),
            ui,
            rng,
            art: String::new(),
        }
    }

    /// The most recently generated art, empty before the first generation.
    pub fn current_art(&self) -> &str {
        &self.art
    }

    /// Top-level menu loop. Returns once the user chooses to exit.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.restart_screen()?;
            self.ui.main_menu();
            let answer =
                self.prompter
                    .ask_choice(settings::MAIN_MENU_QUESTION, &["1", "2", "3"], "1")?;
            match MainChoice::from_answer(&answer).unwrap_or(MainChoice::TextArt) {
                MainChoice::TextArt => {
                    self.restart_screen()?;
                    if self.text_flow()? == FlowOutcome::Exit {
                        return Ok(());
                    }
                }
                MainChoice::RandomArt => {
                    self.restart_screen()?;
                    if self.random_flow()? == FlowOutcome::Exit {
                        return Ok(());
                    }
                }
                MainChoice::Exit => {
                    self.ui.farewell();
                    return Ok(());
                }
            }
        }
    }

    fn restart_screen(&mut self) -> Result<(), SessionError> {
        self.ui.clear_screen();
        // The banner is itself figlet output; a missing banner font falls
        // back silently rather than nagging on every screen.
        let art = self.render_with_fallback(settings::BANNER_TEXT, settings::BANNER_FONT, true)?;
        self.ui.banner(&art);
        Ok(())
    }

    fn text_flow(&mut self) -> Result<FlowOutcome, SessionError> {
        loop {
            let font = self.choose_font()?;
            let text = self.read_art_text()?;
            self.art = self.make_text_art(&text, font)?;
            self.ui.preview(&self.art);
            match self.action_loop()? {
                AfterArt::Another => self.restart_screen()?,
                AfterArt::Back => return Ok(FlowOutcome::Back),
                AfterArt::Exit => return Ok(FlowOutcome::Exit),
            }
        }
    }

    fn random_flow(&mut self) -> Result<FlowOutcome, SessionError> {
        loop {
            self.art = self.make_random_art()?;
            self.ui.preview(&self.art);
            match self.action_loop()? {
                AfterArt::Another => self.restart_screen()?,
                AfterArt::Back => return Ok(FlowOutcome::Back),
                AfterArt::Exit => return Ok(FlowOutcome::Exit),
            }
        }
    }

    fn choose_font(&mut self) -> Result<&'static str, SessionError> {
        self.ui.rule(settings::FONT_RULE_LABEL);
        self.ui.font_menu(FONTS);
        let question = format!("Choose a font (1-{})", FONTS.len());
        let index = self.prompter.ask_index(&question, FONTS.len(), 1)?;
        Ok(catalog::font_by_menu_index(index).unwrap_or(DEFAULT_FONT))
    }

    fn read_art_text(&mut self) -> Result<String, SessionError> {
        self.ui.rule(settings::TEXT_RULE_LABEL);
        loop {
            let text = self
                .prompter
                .ask(settings::TEXT_QUESTION, settings::TEXT_DEFAULT)?;
            if text.trim().is_empty() {
                self.ui.error(settings::MSG_EMPTY_TEXT);
                continue;
            }
            return Ok(text);
        }
    }

    fn make_text_art(&mut self, text: &str, font: &str) -> Result<String, SessionError> {
        let mut spinner = start_progress(settings::LABEL_RENDERING, self.ui.color());
        pause_ms(settings::PAUSE_RENDER_MS);
        let art = self.render_with_fallback(text, font, false)?;
        pause_ms(settings::PAUSE_SETTLE_MS);
        spinner.finish();
        Ok(art)
    }

    fn make_random_art(&mut self) -> Result<String, SessionError> {
        let mut spinner = start_progress(settings::LABEL_RANDOM, self.ui.color());
        pause_ms(settings::PAUSE_RANDOM_MS);
        let pieces = draw_random_pieces(self.rng.as_mut());
        let word_art = self.render_with_fallback(pieces.word, pieces.font, false)?;
        pause_ms(settings::PAUSE_SETTLE_MS);
        spinner.finish();
        Ok(compose_random_art(&pieces.patterns, &word_art))
    }

    fn action_loop(&mut self) -> Result<AfterArt, SessionError> {
        loop {
            self.ui.action_menu();
            let answer = self.prompter.ask_choice(
                settings::ACTION_MENU_QUESTION,
                &["1", "2", "3", "4"],
                "1",
            )?;
            match ActionChoice::from_answer(&answer).unwrap_or(ActionChoice::Copy) {
                ActionChoice::Copy => self.copy_current_art(),
                ActionChoice::Another => return Ok(AfterArt::Another),
                ActionChoice::Back => return Ok(AfterArt::Back),
                ActionChoice::Exit => return Ok(AfterArt::Exit),
            }
        }
    }

    /// Copy is always non-fatal: failures are reported and the menu loops.
    fn copy_current_art(&mut self) {
        let mut spinner = start_progress(settings::LABEL_COPYING, self.ui.color());
        pause_ms(settings::PAUSE_COPY_MS);
        let result = self.clipboard.write(&self.art);
        spinner.finish();
        match result {
            Ok(()) => {
                self.ui.success(settings::MSG_COPY_OK);
                pause_ms(settings::PAUSE_COPIED_MS);
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard write failed");
                self.ui.error(&format!("Couldn't copy to clipboard: {e}"));
            }
        }
    }

    fn render_with_fallback(
        &mut self,
        text: &str,
        font: &str,
        quiet: bool,
    ) -> Result<String, SessionError> {
        match self.figlet.render(text, font) {
            Ok(art) => Ok(art),
            Err(e) => {
                tracing::debug!(font, error = %e, "font failed, falling back to default");
                if !quiet {
                    self.ui.error(&format!("Whoops! Couldn't use that font: {e}"));
                }
                Ok(self.figlet.render(text, DEFAULT_FONT)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn main_choice_parses_menu_answers() {
        assert_eq!(MainChoice::from_answer("1"), Some(MainChoice::TextArt));
        assert_eq!(MainChoice::from_answer("2"), Some(MainChoice::RandomArt));
        assert_eq!(MainChoice::from_answer("3"), Some(MainChoice::Exit));
        assert_eq!(MainChoice::from_answer("4"), None);
        assert_eq!(MainChoice::from_answer(""), None);
    }

    #[test]
    fn action_choice_parses_menu_answers() {
        assert_eq!(ActionChoice::from_answer("1"), Some(ActionChoice::Copy));
        assert_eq!(ActionChoice::from_answer("2"), Some(ActionChoice::Another));
        assert_eq!(ActionChoice::from_answer("3"), Some(ActionChoice::Back));
        assert_eq!(ActionChoice::from_answer("4"), Some(ActionChoice::Exit));
        assert_eq!(ActionChoice::from_answer("copy"), None);
    }

    #[test]
    fn random_pieces_come_from_the_catalogs() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = draw_random_pieces(&mut rng);
        for pattern in pieces.patterns {
            assert!(PATTERNS.contains(&pattern));
        }
        assert!(WORDS.contains(&pieces.word));
        assert!(FONTS.contains(&pieces.font));
    }

    #[test]
    fn random_pieces_are_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(draw_random_pieces(&mut a), draw_random_pieces(&mut b));
    }

    #[test]
    fn composed_random_art_has_six_newline_joined_segments() {
        let patterns = ["a", "b", "c", "d", "e"];
        let composed = compose_random_art(&patterns, "WORD");
        assert_eq!(composed.split('\n').count(), 6);
        assert_eq!(composed, "a\nb\nc\nd\ne\nWORD");
    }

    #[test]
    fn composed_random_art_keeps_multiline_word_art_intact() {
        let patterns = ["p1", "p2", "p3", "p4", "p5"];
        let word_art = "##\n##";
        let composed = compose_random_art(&patterns, word_art);
        let lines: Vec<&str> = composed.lines().collect();
        assert_eq!(lines.len(), 5 + 2);
        assert_eq!(lines[..5].to_vec(), patterns.to_vec());
        assert!(composed.ends_with(word_art));
    }
}
