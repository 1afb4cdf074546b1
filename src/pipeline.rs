use crate::caches::Caches;
use crate::config::CurationOptions;
use crate::dataset::DatasetName;
use crate::metrics::DasStore;
use crate::progress::make_count_progress;
use crate::record::{build_record, Record, RecordContext};
use crate::util::{init_tracing_once, read_source_lines, Presence};
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Drives a curation run: load caches, build one record per target dataset, serialise.
#[derive(Clone)]
pub struct RecordCurator {
    pub(crate) opts: CurationOptions,
    progress: bool,
}

impl Default for RecordCurator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordCurator {
    pub fn new() -> Self {
        Self { opts: CurationOptions::default(), progress: false }
    }

    // -------- Builder methods --------
    pub fn options(mut self, opts: CurationOptions) -> Self { self.opts = opts; self }
    pub fn inputs_root(mut self, root: impl AsRef<Path>) -> Self { self.opts = self.opts.with_inputs_root(root); self }
    pub fn datasets_list(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_datasets_list(path); self }
    pub fn progress(mut self, yes: bool) -> Self { self.progress = yes; self }

    pub fn load_caches(&self) -> Result<Caches> {
        Caches::load(&self.opts)
    }

    /// Parse the target list. Every name is validated before any record is built, so a
    /// bad identifier aborts the run without output.
    pub fn read_targets(&self) -> Result<Vec<DatasetName>> {
        let path = &self.opts.datasets_list;
        read_source_lines(path, Presence::Required)?
            .into_iter()
            .map(|(no, line)| {
                DatasetName::parse(&line).with_context(|| format!("{}:{}", path.display(), no))
            })
            .collect()
    }

    /// Records for `datasets`, numbered consecutively from the configured base.
    pub fn create_records(&self, caches: &Caches, datasets: &[DatasetName]) -> Result<Vec<Record>> {
        let das = DasStore::new(&self.opts.das_store_dir);
        let ctx = RecordContext {
            caches,
            das: &das,
            index_dir: &self.opts.index_files_dir,
            constants: &self.opts.constants,
        };
        let pb = if self.progress {
            Some(make_count_progress(datasets.len() as u64, "Building records"))
        } else {
            None
        };

        let mut records = Vec::with_capacity(datasets.len());
        for (recid, ds) in (self.opts.constants.recid_start..).zip(datasets) {
            tracing::debug!("building record {} for {}", recid, ds);
            let rec = build_record(ctx, recid, ds).with_context(|| format!("record {recid} for {ds}"))?;
            records.push(rec);
            if let Some(pb) = &pb { pb.inc(1); }
        }
        if let Some(pb) = pb { pb.finish_with_message("records built"); }
        Ok(records)
    }

    /// Full run: caches, targets, records. Nothing is written here.
    pub fn run(&self) -> Result<Vec<Record>> {
        init_tracing_once();
        let caches = self.load_caches()?;
        let datasets = self.read_targets()?;
        tracing::info!("Curating {} datasets from {}", datasets.len(), self.opts.datasets_list.display());
        let records = self.create_records(&caches, &datasets)?;
        tracing::info!("Built {} records", records.len());
        Ok(records)
    }
}

/// Serialise records as a pretty JSON array: 2-space indent, keys sorted,
/// non-ASCII kept literally, trailing newline.
pub fn write_records<W: Write>(mut w: W, records: &[Record]) -> Result<()> {
    // Going through Value sorts every object's keys.
    let value: Value = serde_json::to_value(records)?;
    serde_json::to_writer_pretty(&mut w, &value)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// Convenience for tests and callers that want the text.
pub fn records_to_string(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(String::from_utf8(buf)?)
}
