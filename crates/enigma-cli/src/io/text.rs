// crates/enigma-cli/src/io/text.rs

use std::io::Read;

use anyhow::{Context, Result};

/// `--text` if given, otherwise all of stdin with the trailing newline removed.
pub fn input_text(text: Option<String>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read text from stdin")?;
    let trimmed = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(trimmed);
    Ok(buf)
}
