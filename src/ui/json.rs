//! NDJSON output for `plan` and `check`
//!
//! `deploy` streams through `JsonEventSink`; the one-shot commands print a
//! single object through here.

use std::io::{self, Write};

use serde::Serialize;

/// Write `event` as one line of NDJSON
///
/// Serialization failures surface as `io::ErrorKind::InvalidData`.
pub fn write_event<W: Write, T: Serialize>(out: &mut W, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::from)?;
    out.write_all(b"\n")?;
    out.flush()
}

pub fn emit<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
