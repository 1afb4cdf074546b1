use std::path::PathBuf;

/// Failure conditions raised while curating records.
/// Operations return `anyhow::Result`; these are the typed roots callers can downcast to.
#[derive(Debug, thiserror::Error)]
pub enum CurationError {
    /// A required input file does not exist.
    #[error("missing source file: {}", path.display())]
    MissingSourceFile { path: PathBuf },

    /// A line of a flat-file source does not have the expected shape.
    #[error("{}:{line}: malformed line {content:?}", path.display())]
    MalformedLine { path: PathBuf, line: usize, content: String },

    /// A dataset identifier does not match `/<short>/<run-period>-<version>/<tier>`.
    #[error("cannot parse dataset {0}")]
    InvalidDatasetName(String),

    /// Strict lookup: every curated dataset must have a DOI.
    #[error("no DOI registered for dataset {0}")]
    MissingDoi(String),

    /// A reco configuration link has no release or global tag entry.
    #[error("no {table} entry for reco configuration {key}")]
    MissingRecoReference { table: &'static str, key: String },
}
