// ============================================================================
// Prompter Interface
// Input boxes the command uses to ask for its parameters
// ============================================================================

use std::collections::VecDeque;

/// One input box request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRequest<'a> {
    /// Text shown above the input
    pub prompt: &'a str,
    /// Value prefilled in the input
    pub value: &'a str,
}

/// Host input box
pub trait Prompter {
    /// Ask the user for text. `None` means the box was dismissed.
    fn prompt(&mut self, request: &PromptRequest<'_>) -> Option<String>;
}

/// Answers prompts from a prepared queue, then reports dismissal
///
/// Records every request it received.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            asked: Vec::new(),
        }
    }

    /// Queue a dismissal
    pub fn then_dismiss(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Prompt texts received so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, request: &PromptRequest<'_>) -> Option<String> {
        self.asked.push(request.prompt.to_string());
        self.answers.pop_front().flatten()
    }
}

/// Always accepts the prefilled value
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn prompt(&mut self, request: &PromptRequest<'_>) -> Option<String> {
        Some(request.value.to_string())
    }
}
