//! Reading draft text from a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

/// Read the whole input. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => read_from(io::stdin().lock()).context("reading stdin"),
    }
}

pub fn read_from(mut reader: impl Read) -> io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
