// ============================================================================
// Increment Command
// Resolve parameters, then insert one formatted value per cursor
// ============================================================================

use super::errors::{IncrementError, IncrementResult};
use crate::domain::{CursorPosition, IncrementPreset, Insertion, Parameter};
use crate::interfaces::{Notifier, PromptRequest, Prompter, TextEditor};
use crate::printf::{template_is_effective, FormatTemplate};
use crate::sequence::Sequence;

pub const INVALID_NUMBER: &str = "Invalid number";
pub const INVALID_FORMAT: &str = "Invalid format string";
pub const INVALID_PRESET: &str = "Invalid preset";
pub const UNCHANGED_FORMAT: &str = "Format result is same as input";

const START_PROMPT: &str = "Enter start number";
const INCREMENT_PROMPT: &str = "Enter increment number";
const FORMAT_PROMPT: &str = "Enter format string";

/// Parse user input as a finite number.
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Pair cursors with sequence values, in cursor order.
pub fn build_insertions(
    cursors: &[CursorPosition],
    start: f64,
    increment: f64,
    template: &FormatTemplate,
) -> Vec<Insertion> {
    cursors
        .iter()
        .zip(Sequence::new(start, increment))
        .map(|(&position, value)| Insertion::new(position, template.render(value)))
        .collect()
}

/// Insert the sequence at every cursor of `editor` as a single edit.
///
/// Returns the number of insertions.
pub fn apply_increment(
    editor: &mut dyn TextEditor,
    start: f64,
    increment: f64,
    template: &FormatTemplate,
) -> usize {
    let insertions = build_insertions(&editor.cursors(), start, increment, template);
    let count = insertions.len();

    tracing::debug!(count, start, increment, %template, "Inserting sequence");

    if count > 0 {
        editor.insert(insertions);
    }
    count
}

/// Parameters after prompting and parsing
struct Resolved {
    start: f64,
    increment: f64,
    template: FormatTemplate,
}

/// An increment command bound to a preset
///
/// # Example
/// ```
/// use increment::prelude::*;
///
/// let mut editor = BufferEditor::new("a\nb\nc").with_cursor_at_line_ends([0, 1, 2]);
/// let command = IncrementCommand::new(IncrementPreset::indexed_from_one());
///
/// let count = command
///     .execute(&mut AcceptDefaults, &NoOpNotifier, Some(&mut editor))
///     .unwrap();
///
/// assert_eq!(count, 3);
/// assert_eq!(editor.text(), "a1\nb2\nc3");
/// ```
#[derive(Debug, Clone)]
pub struct IncrementCommand {
    preset: IncrementPreset,
}

impl IncrementCommand {
    pub fn new(preset: IncrementPreset) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> &IncrementPreset {
        &self.preset
    }

    /// Run the command against the active editor.
    ///
    /// Every failure except a missing editor or a dismissed prompt is also
    /// reported through `notifier`. On failure nothing is inserted.
    pub fn execute(
        &self,
        prompter: &mut dyn Prompter,
        notifier: &dyn Notifier,
        editor: Option<&mut dyn TextEditor>,
    ) -> IncrementResult<usize> {
        let editor = editor.ok_or(IncrementError::NoActiveEditor)?;

        match self.resolve(prompter, notifier) {
            Ok(resolved) => Ok(apply_increment(
                editor,
                resolved.start,
                resolved.increment,
                &resolved.template,
            )),
            Err(err) => {
                tracing::debug!(%err, "Increment aborted");
                report(notifier, &err);
                Err(err)
            }
        }
    }

    fn resolve(
        &self,
        prompter: &mut dyn Prompter,
        notifier: &dyn Notifier,
    ) -> IncrementResult<Resolved> {
        self.preset
            .validate()
            .map_err(IncrementError::InvalidPreset)?;

        let start = resolve_number(prompter, &self.preset.start, "start", START_PROMPT)?;
        let increment =
            resolve_number(prompter, &self.preset.increment, "increment", INCREMENT_PROMPT)?;
        let format = match &self.preset.format {
            Parameter::Fixed(format) => format.clone(),
            Parameter::Prompt { placeholder } => prompter
                .prompt(&PromptRequest {
                    prompt: FORMAT_PROMPT,
                    value: placeholder,
                })
                .ok_or(IncrementError::Cancelled {
                    parameter: "format",
                })?,
        };

        // Advisory check on the raw text; parsing below is the hard check
        if !template_is_effective(&format) {
            tracing::warn!(format = %format, "Format template does not change its input");
            notifier.warning(UNCHANGED_FORMAT);
        }
        let template = FormatTemplate::parse(&format)?;

        Ok(Resolved {
            start,
            increment,
            template,
        })
    }
}

fn resolve_number(
    prompter: &mut dyn Prompter,
    parameter: &Parameter<f64>,
    name: &'static str,
    prompt: &str,
) -> IncrementResult<f64> {
    match parameter {
        Parameter::Fixed(value) => Ok(*value),
        Parameter::Prompt { placeholder } => {
            let placeholder = placeholder.to_string();
            let input = prompter
                .prompt(&PromptRequest {
                    prompt,
                    value: &placeholder,
                })
                .ok_or(IncrementError::Cancelled { parameter: name })?;

            parse_number(&input).ok_or(IncrementError::InvalidNumber {
                parameter: name,
                input,
            })
        }
    }
}

fn report(notifier: &dyn Notifier, err: &IncrementError) {
    match err {
        IncrementError::NoActiveEditor | IncrementError::Cancelled { .. } => {}
        IncrementError::InvalidNumber { .. } => notifier.error(INVALID_NUMBER),
        IncrementError::InvalidFormat(err) => {
            notifier.error(&format!("{}: {}", INVALID_FORMAT, err))
        }
        IncrementError::InvalidPreset(reason) => {
            notifier.error(&format!("{}: {}", INVALID_PRESET, reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{BufferEditor, Notice, RecordingNotifier, ScriptedPrompter};
    use crate::printf::FormatError;

    fn three_lines() -> BufferEditor {
        BufferEditor::new("a\nb\nc").with_cursor_at_line_ends([0, 1, 2])
    }

    #[test]
    fn test_indexed_from_zero() {
        let mut editor = three_lines();
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::indexed_from_zero());

        let count = command
            .execute(&mut ScriptedPrompter::default(), &notifier, Some(&mut editor))
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(editor.text(), "a0\nb1\nc2");
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_prompted_parameters() {
        let mut editor = three_lines();
        let mut prompter = ScriptedPrompter::new(["1", " 0.5 ", "%.1f"]);
        let command = IncrementCommand::new(IncrementPreset::prompted());

        command
            .execute(&mut prompter, &RecordingNotifier::new(), Some(&mut editor))
            .unwrap();

        assert_eq!(editor.text(), "a1.0\nb1.5\nc2.0");
        assert_eq!(
            prompter.asked(),
            [START_PROMPT, INCREMENT_PROMPT, FORMAT_PROMPT]
        );
    }

    #[test]
    fn test_fractional_increment_has_no_float_noise() {
        let mut editor = BufferEditor::new("\n\n\n\n").with_cursor_at_line_ends(0..4);
        let command = IncrementCommand::new(IncrementPreset::new(0.0, 0.1, "%.2f"));

        command
            .execute(&mut AcceptNothing, &RecordingNotifier::new(), Some(&mut editor))
            .unwrap();

        assert_eq!(editor.text(), "0.00\n0.10\n0.20\n0.30\n");
    }

    #[test]
    fn test_invalid_number_inserts_nothing() {
        let mut editor = three_lines();
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::prompted());

        let result = command.execute(
            &mut ScriptedPrompter::new(["abc"]),
            &notifier,
            Some(&mut editor),
        );

        assert_eq!(
            result,
            Err(IncrementError::InvalidNumber {
                parameter: "start",
                input: "abc".to_string()
            })
        );
        assert_eq!(editor.text(), "a\nb\nc");
        assert_eq!(notifier.notices(), vec![Notice::Error(INVALID_NUMBER.to_string())]);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(" -2.5\n"), Some(-2.5));
    }

    #[test]
    fn test_bad_template_inserts_nothing() {
        let mut editor = three_lines();
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::prompted());

        let result = command.execute(
            &mut ScriptedPrompter::new(["0", "1", "%d%d"]),
            &notifier,
            Some(&mut editor),
        );

        assert_eq!(
            result,
            Err(IncrementError::InvalidFormat(
                FormatError::MultipleDirectives { position: 2 }
            ))
        );
        assert_eq!(editor.text(), "a\nb\nc");
        assert!(matches!(
            notifier.notices().as_slice(),
            [Notice::Warning(_), Notice::Error(message)] if message.starts_with(INVALID_FORMAT)
        ));
    }

    #[test]
    fn test_plain_text_template_warns_then_fails() {
        let mut editor = three_lines();
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::prompted());

        let result = command.execute(
            &mut ScriptedPrompter::new(["0", "1", "abc"]),
            &notifier,
            Some(&mut editor),
        );

        assert_eq!(
            result,
            Err(IncrementError::InvalidFormat(FormatError::MissingDirective))
        );
        assert_eq!(
            notifier.notices()[0],
            Notice::Warning(UNCHANGED_FORMAT.to_string())
        );
    }

    #[test]
    fn test_literal_percent_templates_warn_then_fail() {
        for format in ["%%d", "100%%"] {
            let mut editor = three_lines();
            let notifier = RecordingNotifier::new();
            let command = IncrementCommand::new(IncrementPreset::prompted());

            let result = command.execute(
                &mut ScriptedPrompter::new(["0", "1", format]),
                &notifier,
                Some(&mut editor),
            );

            assert_eq!(
                result,
                Err(IncrementError::InvalidFormat(FormatError::MissingDirective)),
                "format {:?}",
                format
            );
            assert_eq!(editor.text(), "a\nb\nc");
            assert!(matches!(
                notifier.notices().as_slice(),
                [Notice::Warning(warning), Notice::Error(error)]
                    if warning == UNCHANGED_FORMAT && error.starts_with(INVALID_FORMAT)
            ));
        }
    }

    #[test]
    fn test_dismissed_prompt_is_silent() {
        let mut editor = three_lines();
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::prompted());

        let result = command.execute(
            &mut ScriptedPrompter::new(["0"]).then_dismiss(),
            &notifier,
            Some(&mut editor),
        );

        assert_eq!(
            result,
            Err(IncrementError::Cancelled {
                parameter: "increment"
            })
        );
        assert!(notifier.notices().is_empty());
        assert_eq!(editor.text(), "a\nb\nc");
    }

    #[test]
    fn test_no_active_editor() {
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::indexed_from_one());

        let result = command.execute(&mut ScriptedPrompter::default(), &notifier, None);

        assert_eq!(result, Err(IncrementError::NoActiveEditor));
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_invalid_preset() {
        let mut editor = three_lines();
        let notifier = RecordingNotifier::new();
        let command = IncrementCommand::new(IncrementPreset::new(0.0, 1.0, "%s"));

        let result = command.execute(
            &mut ScriptedPrompter::default(),
            &notifier,
            Some(&mut editor),
        );

        assert!(matches!(result, Err(IncrementError::InvalidPreset(_))));
        assert_eq!(editor.text(), "a\nb\nc");
        assert!(matches!(
            notifier.notices().as_slice(),
            [Notice::Error(message)] if message.starts_with(INVALID_PRESET)
        ));
    }

    #[test]
    fn test_apply_increment_without_cursors() {
        let mut editor = BufferEditor::new("untouched");
        let template = FormatTemplate::parse("%d").unwrap();

        assert_eq!(apply_increment(&mut editor, 0.0, 1.0, &template), 0);
        assert_eq!(editor.text(), "untouched");
    }

    #[test]
    fn test_build_insertions_follow_cursor_order() {
        let cursors = [CursorPosition::new(4, 0), CursorPosition::new(1, 0)];
        let template = FormatTemplate::parse("#%x").unwrap();

        let insertions = build_insertions(&cursors, 15.0, 1.0, &template);

        assert_eq!(
            insertions,
            vec![
                Insertion::new(CursorPosition::new(4, 0), "#f"),
                Insertion::new(CursorPosition::new(1, 0), "#10"),
            ]
        );
    }

    /// Fails the test if the command prompts at all
    struct AcceptNothing;

    impl Prompter for AcceptNothing {
        fn prompt(&mut self, request: &PromptRequest<'_>) -> Option<String> {
            panic!("unexpected prompt: {}", request.prompt);
        }
    }
}
