//! Methodology text: selection description, HLT / RECO processing steps and the
//! possible trigger paths of a dataset, as HTML fragments.

use crate::caches::Caches;
use crate::config::RecordConstants;
use crate::dataset::DatasetName;
use crate::error::CurationError;
use anyhow::Result;
use std::collections::BTreeMap;

const PROCESS: &str = "RECO";

/// A reco configuration whose name mentions the dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoMatch<'a> {
    pub config: &'a str,
    pub recid: &'a str,
}

/// Every reco configuration whose name contains `_<short>_`. Plain substring matching:
/// zero or several hits are both legal, and a short name contained in another one
/// matches that one's configurations too.
pub fn reco_matches<'a>(links: &'a BTreeMap<String, String>, short_name: &str) -> Vec<RecoMatch<'a>> {
    let needle = format!("_{short_name}_");
    links
        .iter()
        .filter(|(config, _)| config.contains(&needle))
        .map(|(config, recid)| RecoMatch { config, recid })
        .collect()
}

/// Trigger path as shown to users: the `_v` version suffix is dropped.
pub fn display_trigger_path(path: &str) -> &str {
    path.strip_suffix("_v").unwrap_or(path)
}

pub fn create_selection_information(caches: &Caches, constants: &RecordConstants, ds: &DatasetName) -> Result<String> {
    let mut out = String::new();

    if let Some(description) = caches.selection_descriptions.get(ds.full_name()).filter(|d| !d.is_empty()) {
        out.push_str(&format!("<p>{description}</p>"));
    }

    out.push_str("<p><strong>Data taking / HLT</strong>");
    out.push_str(&format!(
        "<br/>The collision data were assigned to different RAW datasets using the following <a href=\"/record/{}\">HLT configuration</a>.</p>",
        constants.recid_hlt_configuration
    ));

    for m in reco_matches(&caches.reco_links, ds.short_name()) {
        let release = caches.reco_release.get(m.config).ok_or_else(|| CurationError::MissingRecoReference {
            table: "release",
            key: m.config.to_string(),
        })?;
        let global_tag = caches.reco_global_tag.get(m.config).ok_or_else(|| CurationError::MissingRecoReference {
            table: "global tag",
            key: m.config.to_string(),
        })?;
        out.push_str("<p><strong>Data processing / RECO</strong>");
        out.push_str("<br/>This primary AOD dataset was processed from the RAW dataset by the following step (the run number in the configuration file name indicates the first run it was applied to): ");
        out.push_str(&format!("<br/>Step: {PROCESS}"));
        out.push_str(&format!("<br/>Release: {release}"));
        out.push_str(&format!("<br/>Global tag: {global_tag}"));
        out.push_str(&format!(
            "\n        <br/><a href=\"/record/{}\">Configuration file for {PROCESS} step {}</a>",
            m.recid, m.config
        ));
        out.push_str("\n        </p>");
    }

    out.push_str("<p><strong>HLT trigger paths</strong>");
    out.push_str("<br/>The possible <a href=\"/docs/cms-guide-trigger-system#hlt-trigger-path-definitions\">HLT trigger paths</a> in this dataset are:");
    for path in caches.trigger_paths(ds.short_name()) {
        let path = display_trigger_path(path);
        out.push_str(&format!("<br/><a href=\"/search?q={path}&type=Supplementaries&year={}\">{path}</a>", constants.trigger_search_year));
    }
    out.push_str("</p>");

    Ok(out)
}
