//! Line prompts with defaults and validation loops.
//!
//! Prompts and their validation messages go to stderr so stdout stays
//! reserved for panels and art. All re-prompt loops live here; none of them
//! carries a retry limit. End of input surfaces as an io error and bubbles
//! to the top-level handler.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, BufRead};

/// Interactive question/answer reader over any buffered input.
pub struct Prompter<I> {
    input: I,
    color: bool,
}

impl<I: BufRead> Prompter<I> {
    pub fn new(input: I, color: bool) -> Self {
        Self { input, color }
    }

    /// Ask a free-form question; an empty entry resolves to `default`.
    pub fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        self.print_question(question, default);
        let line = self.read_line()?;
        let entry = line.trim_end_matches(['\r', '\n']);
        if entry.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(entry.to_string())
        }
    }

    /// Ask until the answer is one of `choices`.
    pub fn ask_choice(
        &mut self,
        question: &str,
        choices: &[&str],
        default: &str,
    ) -> io::Result<String> {
        loop {
            let answer = self.ask(question, default)?;
            let trimmed = answer.trim();
            if choices.contains(&trimmed) {
                return Ok(trimmed.to_string());
            }
            self.report(settings::MSG_BAD_CHOICE);
        }
    }

    /// Ask until the answer parses as a number in `[1, upper]`.
    pub fn ask_index(&mut self, question: &str, upper: usize, default: usize) -> io::Result<usize> {
        let default_text = default.to_string();
        loop {
            let answer = self.ask(question, &default_text)?;
            match answer.trim().parse::<usize>() {
                Err(_) => self.report(settings::MSG_NOT_A_NUMBER),
                Ok(n) if (1..=upper).contains(&n) => return Ok(n),
                Ok(_) => self.report(settings::MSG_OUT_OF_RANGE),
            }
        }
    }

    fn print_question(&self, question: &str, default: &str) {
        if self.color {
            eprint!(
                "{}{}{}{}{}",
                question.with(settings::COLOR_ACCENT).bold(),
                settings::PROMPT_DEFAULT_OPEN
                    .with(settings::COLOR_DEFAULT_HINT),
                default.with(settings::COLOR_DEFAULT_HINT),
                settings::PROMPT_DEFAULT_CLOSE
                    .with(settings::COLOR_DEFAULT_HINT),
                settings::PROMPT_SUFFIX,
            );
        } else {
            eprint!(
                "{question}{}{default}{}{}",
                settings::PROMPT_DEFAULT_OPEN,
                settings::PROMPT_DEFAULT_CLOSE,
                settings::PROMPT_SUFFIX,
            );
        }
    }

    fn report(&self, message: &str) {
        if self.color {
            eprintln!("{}", message.with(settings::COLOR_ERROR).bold());
        } else {
            eprintln!("{message}");
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<String>> {
        Prompter::new(Cursor::new(script.to_string()), false)
    }

    #[test]
    fn empty_entry_resolves_to_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Text", "Hello World").unwrap(), "Hello World");
    }

    #[test]
    fn whitespace_entry_is_kept_verbatim() {
        let mut p = prompter("   \n");
        assert_eq!(p.ask("Text", "Hello World").unwrap(), "   ");
    }

    #[test]
    fn choice_reprompts_until_valid() {
        let mut p = prompter("9\nnope\n2\n");
        let answer = p.ask_choice("Pick", &["1", "2", "3"], "1").unwrap();
        assert_eq!(answer, "2");
    }

    #[test]
    fn choice_empty_line_takes_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_choice("Pick", &["1", "2"], "1").unwrap(), "1");
    }

    #[test]
    fn index_rejects_non_numeric_then_accepts() {
        let mut p = prompter("abc\n7\n");
        assert_eq!(p.ask_index("Font", 18, 1).unwrap(), 7);
    }

    #[test]
    fn index_rejects_out_of_range_until_valid() {
        let mut p = prompter("99\n0\n18\n");
        assert_eq!(p.ask_index("Font", 18, 1).unwrap(), 18);
    }

    #[test]
    fn index_accepts_surrounding_whitespace() {
        let mut p = prompter("  4 \n");
        assert_eq!(p.ask_index("Font", 18, 1).unwrap(), 4);
    }

    #[test]
    fn closed_input_reports_unexpected_eof() {
        let mut p = prompter("");
        let err = p.ask("Text", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
