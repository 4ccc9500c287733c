//! Unitwise REPL
//!
//! Reads one conversion request per line from stdin and prints the result
//! or the error message. The literal line "exit" ends the session.
//!
//! Diagnostics go to stderr via `tracing` (enable with RUST_LOG); stdout
//! carries only the prompt and the per-line responses.

use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter what you want to convert (or exit): ";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(stdin.lock(), stdout.lock())
}

/// Prompt/read/convert loop. Ends on the exact line "exit" or on EOF.
///
/// Every conversion failure is printed and the loop re-prompts; nothing a
/// user types can abort the session.
fn repl<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut buffer = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            // EOF behaves like "exit"
            break;
        }
        let line = buffer.trim_end_matches(['\n', '\r']);

        if line == "exit" {
            break;
        }

        debug!(line, "processing conversion request");
        match unitwise_units::convert_line(line) {
            Ok(message) => writeln!(output, "{}", message)?,
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    Ok(())
}
