//! Rendering of view tables as CSV or JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Logs any view row using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl std::fmt::Debug) {
    debug!("{:#?}", value);
}

/// Writes `value` as pretty JSON to `writer`, followed by a newline.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes `value` as pretty JSON to a file, replacing it if present.
pub fn write_json_file(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_json(file, value)?;
    debug!(path = %path.display(), "JSON written");
    Ok(())
}

/// Writes `rows` as CSV with a header row to `writer`. Returns the number of
/// data rows written.
pub fn write_csv<W, T>(writer: W, rows: impl IntoIterator<Item = T>) -> Result<usize>
where
    W: Write,
    T: Serialize,
{
    let mut writer = csv::Writer::from_writer(writer);
    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Writes `rows` as a CSV file, replacing it if present.
pub fn write_csv_file<T: Serialize>(path: &str, rows: impl IntoIterator<Item = T>) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    let count = write_csv(file, rows)?;
    info!(path, rows = count, "CSV written");
    Ok(count)
}

/// Writes a table to `path` as CSV, or to stdout as JSON when no path is
/// given.
pub fn emit<T: Serialize>(rows: &[T], path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            write_csv_file(path, rows)?;
        }
        None => write_json(std::io::stdout().lock(), &rows)?,
    }
    Ok(())
}
