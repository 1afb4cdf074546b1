use crate::error::CurationError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();

/// Install the fmt subscriber once. Logs go to stderr; stdout is reserved for records.
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Whether a source file must exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Absence yields an empty table.
    Optional,
}

/// Open a source file according to `presence`. `Ok(None)` means an optional file is absent.
pub fn open_source(path: &Path, presence: Presence) -> Result<Option<File>> {
    if !path.exists() {
        return match presence {
            Presence::Required => Err(CurationError::MissingSourceFile { path: path.to_path_buf() }.into()),
            Presence::Optional => {
                tracing::debug!("optional source {} not present, using empty table", path.display());
                Ok(None)
            }
        };
    }
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(Some(f))
}

/// Read a source file into `(line_number, trimmed_line)` pairs, skipping blank lines.
/// Line numbers are 1-based for diagnostics.
pub fn read_source_lines(path: &Path, presence: Presence) -> Result<Vec<(usize, String)>> {
    let Some(f) = open_source(path, presence)? else {
        return Ok(Vec::new());
    };
    let mut out = Vec::new();
    for (i, line) in BufReader::new(f).lines().enumerate() {
        let line = line.with_context(|| format!("read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push((i + 1, trimmed.to_string()));
    }
    Ok(out)
}
