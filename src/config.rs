use std::path::{Path, PathBuf};

/// Fixed values stamped into every record of this collection.
#[derive(Clone, Debug)]
pub struct RecordConstants {
    pub recid_start: u64,
    pub recid_validated_runs_full: u64,
    pub recid_validated_runs_muons: u64,
    pub recid_hlt_configuration: u64,
    pub recid_collaboration: u64,
    pub global_tag: String,
    pub release: String,
    pub collision_energy: String,
    pub collision_type: String,
    pub year_published: String,
    pub trigger_search_year: String, // year filter of the trigger path search links
}

impl Default for RecordConstants {
    fn default() -> Self {
        Self {
            recid_start: 24600,
            recid_validated_runs_full: 14212,
            recid_validated_runs_muons: 14213,
            recid_hlt_configuration: 23900,
            recid_collaboration: 451,
            global_tag: "75X_dataRun2_v13".to_string(),
            release: "CMSSW_7_5_8_patch3".to_string(),
            collision_energy: "5.02TeV".to_string(),
            collision_type: "pp".to_string(),
            year_published: "2023".to_string(),
            trigger_search_year: "2015".to_string(),
        }
    }
}

/// Locations of every curation input, plus the record constants.
/// Defaults follow the curation tree layout, relative to the working directory.
#[derive(Clone, Debug)]
pub struct CurationOptions {
    pub datasets_list: PathBuf,       // target dataset names, one per line
    pub das_store_dir: PathBuf,       // <dataset with '/'->'@'>.json documents
    pub triggers_file: PathBuf,       // "dataset,trigger" lines (optional)
    pub doi_file: PathBuf,            // "dataset doi" lines
    pub run_numbers_file: PathBuf,    // header-blocked run number list
    pub container_images_file: PathBuf,
    pub reco_release_file: PathBuf,   // "reco.py release"
    pub reco_global_tag_file: PathBuf, // "reco.py globaltag"
    pub reco_links_file: PathBuf,     // reco name -> config record id (optional)
    pub selection_files: Vec<PathBuf>, // "dataset:description" CSVs (optional)
    pub index_files_dir: PathBuf,
    pub constants: RecordConstants,
}

impl Default for CurationOptions {
    fn default() -> Self {
        let inputs = PathBuf::from("./inputs");
        Self {
            datasets_list: inputs.join("cms-2015-collision-datasets-hi-ppref.txt"),
            das_store_dir: inputs.join("das-json-store"),
            triggers_file: inputs.join("hlt-2015-hi-ppref-datasets.txt"),
            doi_file: inputs.join("doi-col.txt"),
            run_numbers_file: PathBuf::from("../cms-YYYY-run-numbers/inputs/allruns.txt"),
            container_images_file: PathBuf::from("../cms-release-info/cms_release_container_images_info.json"),
            reco_release_file: inputs.join("reco-config-files-cmssw.csv"),
            reco_global_tag_file: inputs.join("reco-config-files-globaltag.csv"),
            reco_links_file: PathBuf::from("./outputs/reco_config_files_link_info.json"),
            selection_files: vec![inputs.join("CMSDatasetDescription_Run2015E.csv")],
            index_files_dir: inputs.join("eos-file-indexes"),
            constants: RecordConstants::default(),
        }
    }
}

impl CurationOptions {
    /// Re-root every input under `root`, keeping the file names of the default layout.
    /// Sibling-tree sources (run numbers, container images) land directly in `root/inputs`.
    pub fn with_inputs_root(mut self, root: impl AsRef<Path>) -> Self {
        fn rebase(dir: &Path, p: &Path) -> PathBuf {
            dir.join(p.file_name().unwrap_or(p.as_os_str()))
        }
        let root = root.as_ref();
        let inputs = root.join("inputs");
        self.datasets_list = rebase(&inputs, &self.datasets_list);
        self.das_store_dir = rebase(&inputs, &self.das_store_dir);
        self.triggers_file = rebase(&inputs, &self.triggers_file);
        self.doi_file = rebase(&inputs, &self.doi_file);
        self.run_numbers_file = rebase(&inputs, &self.run_numbers_file);
        self.container_images_file = rebase(&inputs, &self.container_images_file);
        self.reco_release_file = rebase(&inputs, &self.reco_release_file);
        self.reco_global_tag_file = rebase(&inputs, &self.reco_global_tag_file);
        self.reco_links_file = rebase(&root.join("outputs"), &self.reco_links_file);
        self.selection_files = self.selection_files.iter().map(|p| rebase(&inputs, p)).collect();
        self.index_files_dir = rebase(&inputs, &self.index_files_dir);
        self
    }
    pub fn with_datasets_list(mut self, path: impl AsRef<Path>) -> Self {
        self.datasets_list = path.as_ref().to_path_buf();
        self
    }
    pub fn with_das_store_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.das_store_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_triggers_file(mut self, path: impl AsRef<Path>) -> Self {
        self.triggers_file = path.as_ref().to_path_buf();
        self
    }
    pub fn with_doi_file(mut self, path: impl AsRef<Path>) -> Self {
        self.doi_file = path.as_ref().to_path_buf();
        self
    }
    pub fn with_run_numbers_file(mut self, path: impl AsRef<Path>) -> Self {
        self.run_numbers_file = path.as_ref().to_path_buf();
        self
    }
    pub fn with_container_images_file(mut self, path: impl AsRef<Path>) -> Self {
        self.container_images_file = path.as_ref().to_path_buf();
        self
    }
    pub fn with_reco_files(mut self, release: impl AsRef<Path>, global_tag: impl AsRef<Path>) -> Self {
        self.reco_release_file = release.as_ref().to_path_buf();
        self.reco_global_tag_file = global_tag.as_ref().to_path_buf();
        self
    }
    pub fn with_reco_links_file(mut self, path: impl AsRef<Path>) -> Self {
        self.reco_links_file = path.as_ref().to_path_buf();
        self
    }
    pub fn with_selection_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.selection_files = files.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        self
    }
    pub fn with_index_files_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.index_files_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_constants(mut self, constants: RecordConstants) -> Self {
        self.constants = constants;
        self
    }
}
