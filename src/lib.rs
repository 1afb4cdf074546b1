mod config;
mod error;
mod util;

mod loaders;
mod deep_json;
mod dataset;
mod caches;

mod metrics;
mod checksum;
mod file_index;
mod selection;

mod record;
mod pipeline;
mod progress;

pub use crate::config::{CurationOptions, RecordConstants};
pub use crate::error::CurationError;
pub use crate::util::{init_tracing_once, Presence};

// flat-file loaders and the cache context built from them
pub use crate::loaders::{
    load_blocked_list, load_comma_pairs, load_delimited, load_json_object, load_link_table, load_whitespace_pairs,
};
pub use crate::caches::Caches;

pub use crate::deep_json::{find_deep, is_truthy};
pub use crate::dataset::DatasetName;
pub use crate::metrics::{DasCounts, DasStore};

// index files and their integrity metadata
pub use crate::checksum::{adler32_hex, adler32_hex_bytes, file_size};
pub use crate::file_index::{
    dataset_index_file_base, dataset_location, group_by_kind, index_files, IndexFile, IndexKind, XROOTD_URI_BASE,
};

pub use crate::selection::{create_selection_information, display_trigger_path, reco_matches, RecoMatch};
pub use crate::record::{abstract_description, build_record, file_entries, title_additional, Record, RecordContext};
pub use crate::pipeline::{records_to_string, write_records, RecordCurator};
