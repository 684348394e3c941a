//! Scripted-session helpers.
//!
//! Runs multi-line command scripts through the parser and the engine,
//! collecting rendered outputs for golden-style assertions. Rendering
//! follows the shell's rules: absent keys print `NULL`, FIND keys are
//! space-joined, writes print nothing, conditions print their message.

use nestkv_core::{Engine, Outcome};
use nestkv_query::parse;

/// Renders an outcome the way the shell prints it; `None` means silence.
#[must_use]
pub fn render_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Value(None) => Some("NULL".to_owned()),
        Outcome::Value(Some(value)) => Some(value.to_string()),
        Outcome::Count(n) => Some(n.to_string()),
        Outcome::Keys(keys) => Some(keys.join(" ")),
        Outcome::Done | Outcome::Halted => None,
    }
}

/// Executes a script against an engine, one command per line.
///
/// Returns every printed line in order. Blank lines are skipped, engine
/// conditions render as output and do not stop the script, END does.
///
/// # Panics
///
/// Panics on a syntax error: scripts in tests are expected to be
/// well-formed.
pub fn run_script(engine: &mut Engine, script: &str) -> Vec<String> {
    let mut outputs = Vec::new();

    for line in script.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = parse(trimmed)
            .unwrap_or_else(|err| panic!("script line {trimmed:?} failed to parse: {err}"));

        match engine.execute(command) {
            Ok(Outcome::Halted) => break,
            Ok(outcome) => {
                if let Some(text) = render_outcome(&outcome) {
                    outputs.push(text);
                }
            }
            Err(err) => outputs.push(err.to_string()),
        }
    }

    outputs
}

/// Executes a script on a fresh engine and returns the printed lines.
pub fn script_outputs(script: &str) -> Vec<String> {
    let mut engine = Engine::new();
    run_script(&mut engine, script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestkv_core::Value;

    #[test]
    fn collects_only_printed_lines() {
        let outputs = script_outputs(
            "SET A 10\n\
             GET A\n\
             GET B\n",
        );
        assert_eq!(outputs, vec!["10", "NULL"]);
    }

    #[test]
    fn renders_values_and_counts() {
        assert_eq!(render_outcome(&Outcome::Count(3)), Some("3".into()));
        assert_eq!(
            render_outcome(&Outcome::Value(Some(Value::Float(2.5)))),
            Some("2.5".into())
        );
        assert_eq!(render_outcome(&Outcome::Done), None);
    }

    #[test]
    fn end_stops_the_script() {
        let outputs = script_outputs(
            "SET A 1\n\
             END\n\
             GET A\n",
        );
        assert!(outputs.is_empty());
    }

    #[test]
    fn conditions_render_and_do_not_stop() {
        let outputs = script_outputs(
            "COMMIT\n\
             SET A 1\n\
             GET A\n",
        );
        assert_eq!(outputs, vec!["NotInTransaction", "1"]);
    }
}
