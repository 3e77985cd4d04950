//! Interactive prompting
//!
//! The resolver asks questions through the [`Prompter`] trait so tests can
//! script answers. The terminal implementation renders on stderr via
//! `dialoguer`, leaving stdout clean for the generated license.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Outcome of asking one question
pub enum Answer {
    /// A line of input, possibly empty
    Text(String),
    /// Input exhausted or unreadable
    Eof,
}

/// Source of interactive answers
pub trait Prompter {
    /// Ask one question. `fallback` is offered as the accept-on-empty
    /// value when present.
    fn ask(&mut self, prompt: &str, fallback: Option<&str>) -> Answer;
}

/// Prompter backed by the controlling terminal
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str, fallback: Option<&str>) -> Answer {
        let theme = ColorfulTheme::default();

        let mut input_prompt = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(fallback) = fallback {
            input_prompt = input_prompt.default(fallback.to_string());
        }

        match input_prompt.interact() {
            Ok(text) => Answer::Text(text),
            Err(_) => Answer::Eof,
        }
    }
}
