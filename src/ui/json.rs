//! NDJSON output: every event is one JSON object on its own line.

use std::io::{self, Write};

pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)
}

/// Write one event to stdout and flush it, so consumers see it immediately.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_event(&mut stdout, &event)?;
    stdout.flush()
}
