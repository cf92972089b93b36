//! Interactive input capability.
//!
//! Workflows never read the terminal directly; they go through a
//! [`PromptProvider`] so tests can script the interaction. The production
//! implementation blocks on the terminal with no timeout, matching the rest of
//! the strictly sequential execution model.

use crate::error::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

pub trait PromptProvider {
    /// Ask for an index into a candidate list of `len` entries. Callers
    /// re-prompt while the answer is outside `[0, len)`.
    fn choose_index(&mut self, kind: &str, len: usize) -> Result<usize>;

    /// Yes/no confirmation.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Free-text line input; an empty line means "skip".
    fn read_line(&mut self, message: &str) -> Result<String>;
}

/// Terminal-backed prompts via dialoguer.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptProvider for TermPrompter {
    fn choose_index(&mut self, kind: &str, len: usize) -> Result<usize> {
        // dialoguer re-prompts on unparsable input; the range check here keeps
        // out-of-range answers in the same loop.
        let index = Input::with_theme(&self.theme)
            .with_prompt(format!("{} index", kind))
            .validate_with(move |value: &usize| {
                if *value < len {
                    Ok(())
                } else {
                    Err(format!("select an index between 0 and {}", len - 1))
                }
            })
            .interact_text()?;
        Ok(index)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .interact()?;
        Ok(answer)
    }

    fn read_line(&mut self, message: &str) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}
