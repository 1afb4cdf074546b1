#![allow(dead_code)]

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ZERO_BIAS: &str = "/ZeroBias/HIRun2015-PromptReco-v1/AOD";
pub const HIGH_PT_JET: &str = "/HighPtJet80/HIRun2015-PromptReco-v1/AOD";
pub const ZERO_BIAS_INDEX_BASE: &str = "CMS_HIRun2015_ZeroBias_AOD_PromptReco-v1";

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn inputs(root: &Path) -> PathBuf {
    root.join("inputs")
}

/// Build a tree holding only the required sources, laid out for `inputs_root(..)`:
/// - target list: the ZeroBias dataset
/// - DOI table with a ZeroBias entry
/// - run-number list: ZeroBias with runs 261447 and 261446 (unsorted on disk)
/// - container images for the 2015 HI release; empty reco tables
///
/// Optional sources (triggers, selection descriptions, reco links) are absent, the
/// DAS store and index-file directories are empty.
pub fn make_tree_minimal() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let inp = inputs(dir.path());

    write_file(&inp.join("cms-2015-collision-datasets-hi-ppref.txt"), &format!("{ZERO_BIAS}\n"));
    write_file(&inp.join("doi-col.txt"), &format!("{ZERO_BIAS} 10.7483/OPENDATA.CMS.ZB15\n"));
    write_file(
        &inp.join("allruns.txt"),
        &format!("{ZERO_BIAS}\n261447\n261446\n/Other/Run2015E-v1/RAW\n262000\n"),
    );
    write_file(
        &inp.join("cms_release_container_images_info.json"),
        &json!({
            "CMSSW_7_5_8_patch3": [
                {"name": "gitlab-registry.cern.ch/cms-cloud/cmssw-docker/cmssw_7_5_8_patch3-slc6_amd64_gcc491", "registry": "gitlab"}
            ]
        })
        .to_string(),
    );
    write_file(&inp.join("reco-config-files-cmssw.csv"), "");
    write_file(&inp.join("reco-config-files-globaltag.csv"), "");
    fs::create_dir_all(inp.join("das-json-store")).unwrap();
    fs::create_dir_all(inp.join("eos-file-indexes")).unwrap();
    dir
}

/// The minimal tree plus every optional source, and a second dataset:
/// - HighPtJet80 is listed after ZeroBias, has a DOI but no run numbers
/// - triggers for ZeroBias (one with a `_v` suffix)
/// - a selection description with non-ASCII text for ZeroBias
/// - two reco configurations mentioning `_ZeroBias_`, one for HighPtJet80
/// - a DAS document for ZeroBias with nested counts
/// - index files for ZeroBias: two JSON, one TXT, plus unrelated entries
pub fn make_tree_full() -> TempDir {
    let dir = make_tree_minimal();
    let root = dir.path();
    let inp = inputs(root);

    write_file(
        &inp.join("cms-2015-collision-datasets-hi-ppref.txt"),
        &format!("{ZERO_BIAS}\n\n{HIGH_PT_JET}\n"),
    );
    write_file(
        &inp.join("doi-col.txt"),
        &format!("{ZERO_BIAS} 10.7483/OPENDATA.CMS.ZB15\n{HIGH_PT_JET} 10.7483/OPENDATA.CMS.JET15\n"),
    );
    write_file(
        &inp.join("hlt-2015-hi-ppref-datasets.txt"),
        "ZeroBias,HLT_L1ZeroBias_v\nZeroBias,HLT_Random_v\nHighPtJet80,HLT_AK4PFJet80_Eta5p1_v\n",
    );
    write_file(
        &inp.join("CMSDatasetDescription_Run2015E.csv"),
        &format!("{ZERO_BIAS}:Événements sans biais\n"),
    );
    write_file(
        &inp.join("reco-config-files-cmssw.csv"),
        "reco_HIRun2015_ZeroBias_261445.py CMSSW_7_5_8_patch3\n\
         reco_HIRun2015_ZeroBias_262081.py CMSSW_7_5_8_patch5\n\
         reco_HIRun2015_HighPtJet80_261445.py CMSSW_7_5_8_patch3\n",
    );
    write_file(
        &inp.join("reco-config-files-globaltag.csv"),
        "reco_HIRun2015_ZeroBias_261445.py 75X_dataRun2_v13\n\
         reco_HIRun2015_ZeroBias_262081.py 75X_dataRun2_v14\n\
         reco_HIRun2015_HighPtJet80_261445.py 75X_dataRun2_v13\n",
    );
    write_file(
        &root.join("outputs").join("reco_config_files_link_info.json"),
        &json!({
            "reco_HIRun2015_ZeroBias_261445": "24590",
            "reco_HIRun2015_ZeroBias_262081": 24591,
            "reco_HIRun2015_HighPtJet80_261445": "24592"
        })
        .to_string(),
    );
    write_file(
        &inp.join("das-json-store").join("@ZeroBias@HIRun2015-PromptReco-v1@AOD.json"),
        &json!([
            {"das": {"expire": 0}, "dataset": [{"name": ZERO_BIAS, "nevents": 0}]},
            {"dataset": [{"name": ZERO_BIAS, "nevents": 123456, "nfiles": 42, "size": 987654321}]}
        ])
        .to_string(),
    );

    let idx = inp.join("eos-file-indexes");
    write_file(&idx.join(format!("{ZERO_BIAS_INDEX_BASE}_file_index.txt")), "Wikipedia");
    write_file(&idx.join(format!("{ZERO_BIAS_INDEX_BASE}_file_index.json")), "[]");
    write_file(&idx.join(format!("{ZERO_BIAS_INDEX_BASE}_file_index_2.json")), "");
    write_file(&idx.join(format!("{ZERO_BIAS_INDEX_BASE}_file_index.root")), "ignored");
    write_file(&idx.join("CMS_HIRun2015_HighPtJet80_AOD_PromptReco-v1_file_index.txt"), "other");
    dir
}
