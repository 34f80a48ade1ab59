//! Terminal I/O for the interactive game
//!
//! One prompt line out, one answer line in. UTF-8 only.

use std::io::{self, BufRead, Write};

use super::errors::CliResult;

/// Reads one answer line from stdin. `None` on EOF.
pub fn read_answer() -> CliResult<Option<String>> {
    let stdin = io::stdin();
    let mut line = String::new();

    let bytes = stdin.lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Writes one line to stdout, flushed.
pub fn write_line(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}
