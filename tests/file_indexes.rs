#[path = "common/mod.rs"]
mod common;

use common::*;
use cmsrec::{
    adler32_hex, adler32_hex_bytes, dataset_index_file_base, dataset_location, file_entries, index_files, DatasetName,
    IndexKind,
};

#[test]
fn location_and_index_base_from_name() {
    let ds = DatasetName::parse(ZERO_BIAS).unwrap();
    assert_eq!(dataset_location(&ds), "/eos/opendata/cms/HIRun2015/ZeroBias/AOD/PromptReco-v1");
    assert_eq!(dataset_index_file_base(&ds), ZERO_BIAS_INDEX_BASE);
}

#[test]
fn adler32_matches_known_digests() {
    assert_eq!(adler32_hex_bytes(b"Wikipedia"), "11e60398");
    assert_eq!(adler32_hex_bytes(b""), "00000001");

    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("w.txt");
    write_file(&p, "Wikipedia");
    assert_eq!(adler32_hex(&p).unwrap(), "11e60398");
}

/// Two JSON and one TXT index match ZeroBias; the `.root` file and the other
/// dataset's index are ignored. Listing is in file-name order.
#[test]
fn enumerates_matching_index_files() {
    let tree = make_tree_full();
    let idx = inputs(tree.path()).join("eos-file-indexes");
    let ds = DatasetName::parse(ZERO_BIAS).unwrap();

    let files = index_files(&idx, &ds).unwrap();
    assert_eq!(files.len(), 3);

    let uri_base = format!(
        "root://eospublic.cern.ch//eos/opendata/cms/HIRun2015/ZeroBias/AOD/PromptReco-v1/file-indexes/{ZERO_BIAS_INDEX_BASE}"
    );
    assert_eq!(files[0].kind, IndexKind::Json);
    assert_eq!(files[0].uri, format!("{uri_base}_file_index.json"));
    assert_eq!((files[0].size, files[0].checksum.as_str()), (2, "011500b9"));

    assert_eq!(files[1].kind, IndexKind::Txt);
    assert_eq!(files[1].uri, format!("{uri_base}_file_index.txt"));
    assert_eq!((files[1].size, files[1].checksum.as_str()), (9, "11e60398"));

    assert_eq!(files[2].kind, IndexKind::Json);
    assert_eq!(files[2].uri, format!("{uri_base}_file_index_2.json"));
    assert_eq!((files[2].size, files[2].checksum.as_str()), (0, "00000001"));
}

/// Record entries list JSON indexes first and number each kind on its own.
#[test]
fn file_entries_grouped_and_numbered() {
    let tree = make_tree_full();
    let idx = inputs(tree.path()).join("eos-file-indexes");
    let ds = DatasetName::parse(ZERO_BIAS).unwrap();

    let entries = file_entries(&idx, &ds).unwrap();
    let summary: Vec<(&str, &str, &str)> = entries
        .iter()
        .map(|e| (e.type_.as_str(), e.description.as_str(), e.checksum.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("index.json", "ZeroBias AOD file index (1 of 2) for access to data", "adler32:011500b9"),
            ("index.json", "ZeroBias AOD file index (2 of 2) for access to data", "adler32:00000001"),
            ("index.txt", "ZeroBias AOD file index (1 of 1) for access to data", "adler32:11e60398"),
        ]
    );
}

#[test]
fn no_index_files_for_unknown_dataset_or_directory() {
    let tree = make_tree_full();
    let idx = inputs(tree.path()).join("eos-file-indexes");
    let ds = DatasetName::parse("/Unknown/HIRun2015-PromptReco-v1/AOD").unwrap();
    assert!(index_files(&idx, &ds).unwrap().is_empty());
    assert!(index_files(&tree.path().join("absent"), &ds).unwrap().is_empty());
}
