use crate::config::CurationOptions;
use crate::loaders::{
    load_blocked_list, load_comma_pairs, load_delimited, load_json_object, load_link_table, load_whitespace_pairs,
};
use crate::util::Presence;
use ahash::AHashMap;
use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// Cross-reference tables, populated once at startup and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Caches {
    /// dataset short name -> HLT trigger paths
    pub triggers: AHashMap<String, Vec<String>>,
    /// full dataset name -> DOI
    pub doi: AHashMap<String, String>,
    /// full dataset name -> sorted run numbers
    pub run_numbers: AHashMap<String, Vec<String>>,
    /// release -> container image descriptors
    pub container_images: AHashMap<String, Value>,
    /// reco configuration name -> release
    pub reco_release: AHashMap<String, String>,
    /// reco configuration name -> global tag
    pub reco_global_tag: AHashMap<String, String>,
    /// full dataset name -> selection description
    pub selection_descriptions: AHashMap<String, String>,
    /// reco configuration name -> config-file record id
    pub reco_links: BTreeMap<String, String>,
}

impl Caches {
    /// Populate every table from the sources named in `opts`. Order is irrelevant:
    /// no table depends on another at load time.
    pub fn load(opts: &CurationOptions) -> Result<Self> {
        let mut selection_descriptions = AHashMap::new();
        for file in &opts.selection_files {
            selection_descriptions.extend(load_delimited(file, b':', None, Presence::Optional)?);
        }

        let caches = Self {
            triggers: load_comma_pairs(&opts.triggers_file, Presence::Optional)?,
            doi: load_whitespace_pairs(&opts.doi_file, Presence::Required)?,
            run_numbers: load_blocked_list(&opts.run_numbers_file, Presence::Required)?,
            container_images: load_json_object(&opts.container_images_file, Presence::Required)?,
            reco_release: load_delimited(&opts.reco_release_file, b' ', Some(".py"), Presence::Required)?,
            reco_global_tag: load_delimited(&opts.reco_global_tag_file, b' ', Some(".py"), Presence::Required)?,
            selection_descriptions,
            reco_links: load_link_table(&opts.reco_links_file, Presence::Optional)?,
        };

        tracing::info!(
            "Loaded caches: {} trigger datasets, {} DOIs, {} run-number datasets, {} releases with images, {} reco configs, {} reco links, {} selection descriptions",
            caches.triggers.len(),
            caches.doi.len(),
            caches.run_numbers.len(),
            caches.container_images.len(),
            caches.reco_release.len(),
            caches.reco_links.len(),
            caches.selection_descriptions.len(),
        );
        Ok(caches)
    }

    /// Trigger paths recorded for a dataset short name; empty when unknown.
    pub fn trigger_paths(&self, short_name: &str) -> &[String] {
        self.triggers.get(short_name).map(Vec::as_slice).unwrap_or(&[])
    }
}
