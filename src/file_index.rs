//! Index-file artifacts of a dataset on EOS: location rules and enumeration of the
//! local index-file store.

use crate::checksum::{adler32_hex, file_size};
use crate::dataset::DatasetName;
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

pub const XROOTD_URI_BASE: &str = "root://eospublic.cern.ch/";
pub const XROOTD_DIR_BASE: &str = "/eos/opendata/";
pub const EXPERIMENT: &str = "cms";

/// Index file flavour. Records list all `.json` indexes before the `.txt` ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexKind {
    Json,
    Txt,
}

impl IndexKind {
    pub const ALL: [IndexKind; 2] = [IndexKind::Json, IndexKind::Txt];

    pub fn extension(self) -> &'static str {
        match self {
            IndexKind::Json => ".json",
            IndexKind::Txt => ".txt",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| name.ends_with(k.extension()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexFile {
    pub kind: IndexKind,
    pub uri: String,
    pub size: u64,
    pub checksum: String, // adler32, 8 lowercase hex digits
}

/// `/eos/opendata/cms/<run-period>/<short>/<tier>/<version>`
pub fn dataset_location(ds: &DatasetName) -> String {
    format!(
        "{XROOTD_DIR_BASE}{EXPERIMENT}/{}/{}/{}/{}",
        ds.run_period(),
        ds.short_name(),
        ds.tier(),
        ds.version()
    )
}

/// `CMS_<run-period>_<short>_<tier>_<version>`
pub fn dataset_index_file_base(ds: &DatasetName) -> String {
    format!(
        "{}_{}_{}_{}_{}",
        EXPERIMENT.to_uppercase(),
        ds.run_period(),
        ds.short_name(),
        ds.tier(),
        ds.version()
    )
}

/// Index files of `ds` found in `dir`, in file-name order. A missing directory has none.
pub fn index_files(dir: &Path, ds: &DatasetName) -> Result<Vec<IndexFile>> {
    let base = dataset_index_file_base(ds);
    let location = dataset_location(ds);
    let mut files = Vec::new();
    if !dir.exists() {
        tracing::warn!("index file directory {} does not exist", dir.display());
        return Ok(files);
    }
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else { continue };
        if !name.contains(&base) {
            continue;
        }
        let Some(kind) = IndexKind::from_file_name(name) else { continue };
        files.push(IndexFile {
            kind,
            uri: format!("{XROOTD_URI_BASE}{location}/file-indexes/{name}"),
            size: file_size(entry.path())?,
            checksum: adler32_hex(entry.path())?,
        });
    }
    tracing::debug!("{}: {} index files", ds, files.len());
    Ok(files)
}

/// Split artifacts into per-kind groups, JSON first, each keeping listing order.
pub fn group_by_kind(files: &[IndexFile]) -> Vec<(IndexKind, Vec<&IndexFile>)> {
    IndexKind::ALL
        .into_iter()
        .map(|kind| (kind, files.iter().filter(|f| f.kind == kind).collect()))
        .collect()
}
