//! Session loop and outcome rendering.

use nestkv_core::{Engine, Outcome};
use nestkv_query::parse;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What evaluating one line produced.
#[derive(Debug, PartialEq)]
enum LineResult {
    /// Something to print.
    Output(String),
    /// Nothing to print.
    Silent,
    /// The session is over.
    Halt,
}

/// Evaluates one line of input against the engine.
///
/// Blank lines are skipped. Syntax errors and engine conditions render as
/// output; neither ends the session.
fn eval_line(engine: &mut Engine, line: &str) -> LineResult {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineResult::Silent;
    }

    let command = match parse(trimmed) {
        Ok(command) => command,
        Err(err) => return LineResult::Output(format!("Parse error: {err}")),
    };

    match engine.execute(command) {
        Ok(Outcome::Halted) => LineResult::Halt,
        Ok(outcome) => match render(&outcome) {
            Some(text) => LineResult::Output(text),
            None => LineResult::Silent,
        },
        Err(err) => LineResult::Output(err.to_string()),
    }
}

/// Renders an outcome the way the shell prints it.
///
/// An absent key renders as the `NULL` sentinel; FIND keys are joined with
/// single spaces. SET/UNSET/BEGIN/COMMIT/ROLLBACK print nothing.
fn render(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Value(None) => Some("NULL".to_owned()),
        Outcome::Value(Some(value)) => Some(value.to_string()),
        Outcome::Count(n) => Some(n.to_string()),
        Outcome::Keys(keys) => Some(keys.join(" ")),
        Outcome::Done | Outcome::Halted => None,
    }
}

/// Runs an interactive session over stdin until END or end-of-input.
pub fn run_interactive() -> io::Result<()> {
    let mut engine = Engine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match eval_line(&mut engine, &line) {
            LineResult::Output(text) => println!("{text}"),
            LineResult::Silent => {}
            LineResult::Halt => break,
        }
    }

    println!("Bye-bye!");
    Ok(())
}

/// Executes a script file line by line, stopping at END.
pub fn run_script(path: &Path) -> io::Result<()> {
    let mut engine = Engine::new();

    for line in fs::read_to_string(path)?.lines() {
        match eval_line(&mut engine, line) {
            LineResult::Output(text) => println!("{text}"),
            LineResult::Silent => {}
            LineResult::Halt => break,
        }
    }

    Ok(())
}
