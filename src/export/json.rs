use crate::errors::AppResult;
use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON followed by a trailing newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
