// ============================================================================
// Basic Usage Example
// ============================================================================

use increment::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Increment Example ===\n");

    // Plain arithmetic keeps the precision the numbers were written with
    println!("0.1 + 0.2        = {}", add(0.1, 0.2));
    println!("1.1 * 2.2        = {}", multiply(1.1, 2.2));
    println!("next_value(0, 0.1, 7) = {}\n", next_value(0.0, 0.1, 7));

    // Built-in commands against an in-memory document
    let text = "let a = ;\nlet b = ;\nlet c = ;\nlet d = ;";
    for id in [CommandId::IndexedFromZero, CommandId::IndexedFromOne] {
        let mut editor = BufferEditor::new(text).with_cursors((0..4).map(|line| {
            CursorPosition::new(line, 8)
        }));

        match IncrementCommand::new(id.preset()).execute(
            &mut AcceptDefaults,
            &LoggingNotifier,
            Some(&mut editor),
        ) {
            Ok(count) => println!("[{}] inserted {} values:\n{}\n", id, count, editor.text()),
            Err(err) => println!("[{}] failed: {}\n", id, err),
        }
    }

    // The prompted command, answered by a script: hex register offsets
    let mut editor = BufferEditor::new("REG_A = \nREG_B = \nREG_C = ")
        .with_cursor_at_line_ends(0..3);
    let mut prompter = ScriptedPrompter::new(["16", "4", "0x%04X"]);

    match IncrementCommand::new(CommandId::Increment.preset()).execute(
        &mut prompter,
        &LoggingNotifier,
        Some(&mut editor),
    ) {
        Ok(_) => println!("[{}] hex offsets:\n{}\n", CommandId::Increment, editor.text()),
        Err(err) => println!("[{}] failed: {}\n", CommandId::Increment, err),
    }

    // A malformed template is rejected before anything is inserted
    let mut prompter = ScriptedPrompter::new(["0", "1", "%d and %d"]);
    let notifier = RecordingNotifier::new();
    let result = IncrementCommand::new(CommandId::Increment.preset()).execute(
        &mut prompter,
        &notifier,
        Some(&mut editor),
    );
    println!("Malformed template: {:?}", result);
    for notice in notifier.notices() {
        println!("  notice: {:?}", notice);
    }
}
