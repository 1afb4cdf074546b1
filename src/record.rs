//! Catalog record schema and the per-dataset record builder.

use crate::caches::Caches;
use crate::config::RecordConstants;
use crate::dataset::DatasetName;
use crate::error::CurationError;
use crate::file_index::{group_by_kind, index_files};
use crate::metrics::DasStore;
use crate::selection::create_selection_information;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

#[derive(Clone, Debug, Serialize)]
pub struct Record {
    #[serde(rename = "abstract")]
    pub abstract_: Abstract,
    pub accelerator: String,
    pub collaboration: Collaboration,
    pub collections: Vec<String>,
    pub collision_information: CollisionInformation,
    pub date_created: Vec<String>,
    pub date_published: String,
    pub date_reprocessed: String,
    pub distribution: Distribution,
    pub doi: String,
    pub experiment: String,
    pub files: Vec<FileEntry>,
    pub keywords: Vec<String>,
    pub license: License,
    pub methodology: Methodology,
    pub publisher: String,
    pub recid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_numbers: Option<Vec<String>>,
    pub run_period: Vec<String>,
    pub system_details: SystemDetails,
    pub title: String,
    pub title_additional: String,
    #[serde(rename = "type")]
    pub type_: RecordType,
    pub usage: Usage,
    pub validation: Validation,
}

#[derive(Clone, Debug, Serialize)]
pub struct Abstract {
    pub description: String,
    pub links: Vec<RecidLink>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecidLink {
    pub description: String,
    pub recid: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct UrlLink {
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Collaboration {
    pub name: String,
    pub recid: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CollisionInformation {
    pub energy: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Distribution {
    pub formats: Vec<String>,
    pub number_events: Value,
    pub number_files: Value,
    pub size: Value,
}

#[derive(Clone, Debug, Serialize)]
pub struct FileEntry {
    pub checksum: String,
    pub description: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub type_: String,
    pub uri: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct License {
    pub attribution: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Methodology {
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SystemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_images: Option<Value>,
    pub global_tag: String,
    pub release: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecordType {
    pub primary: String,
    pub secondary: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Usage {
    pub description: String,
    pub links: Vec<UrlLink>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Validation {
    pub description: String,
    pub links: Vec<UrlLink>,
}

const USAGE_DESCRIPTION: &str = "You can access these data through the CMS Open Data container or the CMS Virtual Machine. See the instructions for setting up one of the two alternative environments and getting started in";

const VALIDATION_DESCRIPTION: &str = "During data taking all the runs recorded by CMS are certified as good for physics analysis if all subdetectors, trigger, lumi and physics objects (tracking, electron, muon, photon, jet and MET) show the expected performance. Certification is based first on the offline shifters evaluation and later on the feedback provided by detector and Physics Object Group experts. Based on the above information, which is stored in a specific database called Run Registry, the Data Quality Monitoring group verifies the consistency of the certification and prepares a json file of certified runs to be used for physics analysis. For each reprocessing of the raw data, the above mentioned steps are repeated. For more information see:";

fn link(description: &str, url: impl Into<String>) -> UrlLink {
    UrlLink { description: description.to_string(), url: url.into() }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Everything a record builder reads besides the dataset itself.
#[derive(Clone, Copy)]
pub struct RecordContext<'a> {
    pub caches: &'a Caches,
    pub das: &'a DasStore,
    pub index_dir: &'a Path,
    pub constants: &'a RecordConstants,
}

pub fn abstract_description(ds: &DatasetName) -> String {
    format!(
        "<p>{} primary dataset in {} format from {} of {}. Run period from run number 261445 to 262328.<p>\
         <p>These proton-proton data were taken at the same centre-of-mass energy and have a similar trigger menu to proton-Pb collision data from 2013.</p>\
         <p>The list of validated runs, which must be applied to all analyses, either with the full validation or for an analysis requiring only muons, can be found in</p>",
        ds.short_name(),
        ds.tier(),
        ds.run_descriptor(),
        ds.year()
    )
}

pub fn title_additional(ds: &DatasetName) -> String {
    format!(
        "{} primary dataset in {} format from {} of {} ({})",
        ds.short_name(),
        ds.tier(),
        ds.run_descriptor(),
        ds.year(),
        ds.full_name()
    )
}

/// Numbered index-file entries: JSON indexes first, then TXT, each counted from 1.
pub fn file_entries(index_dir: &Path, ds: &DatasetName) -> Result<Vec<FileEntry>> {
    let files = index_files(index_dir, ds)?;
    let mut out = Vec::with_capacity(files.len());
    for (kind, group) in group_by_kind(&files) {
        let total = group.len();
        for (i, f) in group.into_iter().enumerate() {
            out.push(FileEntry {
                checksum: format!("adler32:{}", f.checksum),
                description: format!(
                    "{} {} file index ({} of {}) for access to data",
                    ds.short_name(),
                    ds.tier(),
                    i + 1,
                    total
                ),
                size: f.size,
                type_: format!("index{}", kind.extension()),
                uri: f.uri.clone(),
            });
        }
    }
    Ok(out)
}

/// Build the complete record for one dataset.
pub fn build_record(ctx: RecordContext<'_>, recid: u64, ds: &DatasetName) -> Result<Record> {
    let c = ctx.constants;
    let name = ds.full_name();

    let doi = ctx
        .caches
        .doi
        .get(name)
        .cloned()
        .ok_or_else(|| CurationError::MissingDoi(name.to_string()))?;

    let counts = ctx.das.counts(name);

    let record = Record {
        abstract_: Abstract {
            description: abstract_description(ds),
            links: vec![
                RecidLink {
                    description: "Validated runs, full validation".to_string(),
                    recid: c.recid_validated_runs_full.to_string(),
                },
                RecidLink {
                    description: "Validated runs, muons only".to_string(),
                    recid: c.recid_validated_runs_muons.to_string(),
                },
            ],
        },
        accelerator: "CERN-LHC".to_string(),
        collaboration: Collaboration { name: "CMS collaboration".to_string(), recid: c.recid_collaboration.to_string() },
        collections: strings(&["CMS-Primary-Datasets"]),
        collision_information: CollisionInformation {
            energy: c.collision_energy.clone(),
            type_: c.collision_type.clone(),
        },
        date_created: vec![ds.year().to_string()],
        date_published: c.year_published.clone(),
        date_reprocessed: ds.year().to_string(),
        distribution: Distribution {
            formats: strings(&["aod", "root"]),
            number_events: counts.number_events,
            number_files: counts.number_files,
            size: counts.size,
        },
        doi,
        experiment: "CMS".to_string(),
        files: file_entries(ctx.index_dir, ds)?,
        keywords: strings(&["heavy-ion physics"]),
        license: License { attribution: "CC0".to_string() },
        methodology: Methodology { description: create_selection_information(ctx.caches, c, ds)? },
        publisher: "CERN Open Data Portal".to_string(),
        recid: recid.to_string(),
        run_numbers: ctx.caches.run_numbers.get(name).cloned(),
        run_period: vec![ds.run_period().to_string()],
        system_details: SystemDetails {
            container_images: ctx.caches.container_images.get(&c.release).cloned(),
            global_tag: c.global_tag.clone(),
            release: c.release.clone(),
        },
        title: name.to_string(),
        title_additional: title_additional(ds),
        type_: RecordType { primary: "Dataset".to_string(), secondary: strings(&["Collision"]) },
        usage: Usage {
            description: USAGE_DESCRIPTION.to_string(),
            links: vec![
                link("Running CMS analysis code using Docker", "/docs/cms-guide-docker"),
                link("How to install the CMS Virtual Machine", format!("/docs/cms-virtual-machine-{}", ds.year())),
                link("Getting Started with CMS 2013 and 2015 Heavy-Ion Open Data", "/docs/cms-getting-started-hi-2013-2015"),
            ],
        },
        validation: Validation {
            description: VALIDATION_DESCRIPTION.to_string(),
            links: vec![link(
                "The Data Quality Monitoring Software for the CMS experiment at the LHC: past, present and future",
                "https://www.epj-conferences.org/articles/epjconf/pdf/2019/19/epjconf_chep2018_02003.pdf",
            )],
        },
    };
    Ok(record)
}
