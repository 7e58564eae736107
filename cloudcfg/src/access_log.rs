//! Append-only record of successful configuration reads.
//!
//! One line per read, `[YYYY-MM-DD HH:MM:SS] Accessed configuration for <app_name>`,
//! in local time. Nothing locks the file: concurrent runs interleave by line.

use crate::{Deployment, Error, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format one log line, including the trailing newline
pub fn entry<Tz>(app_name: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "[{}] Accessed configuration for {}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        app_name,
    )
}

/// Append a line for `deployment` to the log at `path`, creating it if needed.
/// Returns the line written.
pub fn append<P: AsRef<Path>>(path: P, deployment: &Deployment<'_>) -> Result<String> {
    let path = path.as_ref();
    let line = entry(&deployment.app_name(), &Local::now());
    write_line(path, &line).map_err(|source| Error::AccessLog {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "access logged");
    Ok(line)
}

fn write_line(path: &Path, line: &str) -> std::io::Result<()> {
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut wtr = BufWriter::new(f);
    wtr.write_all(line.as_bytes())?;
    wtr.flush()
}
