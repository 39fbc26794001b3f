use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// How a receipt is written to an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Replace,
    /// Adds after earlier receipts, separated by a blank line.
    Append,
}

pub fn write_receipt_file<P: AsRef<Path>>(path: P, contents: &str, mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.create(true);

    match mode {
        WriteMode::Replace => {
            options.write(true).truncate(true);
        }
        WriteMode::Append => {
            options.append(true);
        }
    }

    let mut file = options.open(path)?;
    let needs_separator = mode == WriteMode::Append && file.metadata()?.len() > 0;
    if needs_separator {
        file.write_all(b"\n")?;
    }
    file.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        file.write_all(b"\n")?;
    }

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
