//! Event, file and size counts from the DAS JSON store.
//! Any missing piece of information counts as 0.

use crate::deep_json::{find_deep, is_truthy};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct DasStore {
    dir: PathBuf,
}

impl DasStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// `/A/B-C/D` is stored as `@A@B-C@D.json`.
    pub fn document_path(&self, dataset: &str) -> PathBuf {
        self.dir.join(format!("{}.json", dataset.replace('/', "@")))
    }

    pub fn document(&self, dataset: &str) -> Option<Value> {
        let path = self.document_path(dataset);
        let f = match File::open(&path) {
            Ok(f) => f,
            Err(_) => {
                tracing::debug!("no DAS document for {} at {}", dataset, path.display());
                return None;
            }
        };
        match serde_json::from_reader(BufReader::new(f)) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("unparsable DAS document {}: {}", path.display(), e);
                None
            }
        }
    }

    /// All three counts, read from a single parse of the dataset's document.
    pub fn counts(&self, dataset: &str) -> DasCounts {
        DasCounts::from_document(self.document(dataset).as_ref())
    }

    pub fn number_events(&self, dataset: &str) -> Value {
        self.counts(dataset).number_events
    }

    pub fn number_files(&self, dataset: &str) -> Value {
        self.counts(dataset).number_files
    }

    pub fn size(&self, dataset: &str) -> Value {
        self.counts(dataset).size
    }
}

/// Distribution counts of one dataset; each is 0 unless the document has a truthy value.
#[derive(Clone, Debug, PartialEq)]
pub struct DasCounts {
    pub number_events: Value,
    pub number_files: Value,
    pub size: Value,
}

impl DasCounts {
    pub fn from_document(doc: Option<&Value>) -> Self {
        let metric = |key: &str| {
            doc.and_then(|d| find_deep(d, key))
                .filter(|v| is_truthy(v))
                .cloned()
                .unwrap_or_else(|| Value::from(0))
        };
        Self { number_events: metric("nevents"), number_files: metric("nfiles"), size: metric("size") }
    }
}
