//! User dialogs raised by catalog actions

use std::collections::VecDeque;

/// Front-end hook for the prompts edit and delete need
pub trait Prompter {
    /// Ask for a value; `None` means the user cancelled
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Yes/no confirmation
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompter answering from a prepared script.
///
/// Prompts past the end of the script are treated as cancelled and
/// confirmations as declined.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    confirmations: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, value: impl Into<String>) -> Self {
        self.answers.push_back(Some(value.into()));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn confirm_with(mut self, yes: bool) -> Self {
        self.confirmations.push_back(yes);
        self
    }

    /// Every message shown so far, prompts and confirmations alike
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }
}
