//! Flat JSONL export of paper records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Paper;

/// Write one JSON record per paper, newline-delimited, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns the underlying I/O error on failure.
pub fn write_jsonl(papers: &[Paper], path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for paper in papers {
        serde_json::to_writer(&mut writer, paper)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
