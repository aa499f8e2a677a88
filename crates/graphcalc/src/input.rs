// File: crates/graphcalc/src/input.rs
// Summary: Prompting on a line reader, origin/ratio parsing, and the expression read loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use graph_core::GraphError;

pub const ORIGIN_PROMPT: &str = "Enter pixel coordinates of origin: ";
pub const RATIO_PROMPT: &str = "Enter ratio of pixels per step: ";
pub const EXPR_PROMPT: &str = "Enter an arithmetic expression: ";

pub const EMPTY_MESSAGE: &str = "User entered empty string, exiting...";
pub const INTERRUPT_MESSAGE: &str = "User interrupted, exiting...";

/// Accepts `400,300`, `(400, 300)` and `400 , 300.5`.
pub fn parse_origin(text: &str) -> Result<(f64, f64), GraphError> {
    let bad = || GraphError::Configuration(format!("origin must look like 400,300, got '{}'", text.trim()));
    let inner = text.trim();
    let inner = inner.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap_or(inner);
    let (x, y) = inner.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    Ok((x, y))
}

/// Integer pixels per unit; positivity is checked when the session is built.
pub fn parse_ratio(text: &str) -> Result<i64, GraphError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| GraphError::Configuration(format!("ratio must be an integer, got '{text}'")))
}

/// Write `prompt` and read one line; `None` on end of input.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    EmptyLine,
    EndOfInput,
}

/// Prompt for expressions until an empty line or end of input, handing each to `draw`.
///
/// Errors from `draw` that wrap a recoverable [`GraphError`] are reported on `err`
/// and the loop continues; any other error ends it.
pub fn expression_loop<R, W, E, F>(input: &mut R, out: &mut W, err: &mut E, mut draw: F) -> Result<LoopExit>
where
    R: BufRead,
    W: Write,
    E: Write,
    F: FnMut(&str) -> Result<()>,
{
    loop {
        let Some(line) = prompt_line(input, out, EXPR_PROMPT)? else {
            writeln!(out, "\n{INTERRUPT_MESSAGE}")?;
            return Ok(LoopExit::EndOfInput);
        };
        if line.is_empty() {
            writeln!(out, "\n{EMPTY_MESSAGE}")?;
            return Ok(LoopExit::EmptyLine);
        }
        match draw(&line) {
            Ok(()) => {}
            Err(e) if e.downcast_ref::<GraphError>().is_some_and(GraphError::is_recoverable) => {
                writeln!(err, "Error: {e}")?;
            }
            Err(e) => return Err(e),
        }
    }
}
