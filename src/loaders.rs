//! Flat-file loaders. Each reads one curation source into an in-memory table.
//! Required sources fail with `MissingSourceFile`; optional ones yield an empty table.

use crate::error::CurationError;
use crate::util::{open_source, read_source_lines, Presence};
use ahash::AHashMap;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::BufReader;
use std::path::Path;

fn malformed(path: &Path, line: usize, content: &str) -> anyhow::Error {
    CurationError::MalformedLine { path: path.to_path_buf(), line, content: content.to_string() }.into()
}

/// `key,value` lines; repeated keys accumulate their values in file order.
pub fn load_comma_pairs(path: &Path, presence: Presence) -> Result<AHashMap<String, Vec<String>>> {
    let mut map: AHashMap<String, Vec<String>> = AHashMap::new();
    for (no, line) in read_source_lines(path, presence)? {
        let mut parts = line.split(',');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed(path, no, &line));
        };
        map.entry(key.to_string()).or_default().push(value.to_string());
    }
    Ok(map)
}

/// `key value` lines split on whitespace; exactly two fields per line.
pub fn load_whitespace_pairs(path: &Path, presence: Presence) -> Result<AHashMap<String, String>> {
    let mut map = AHashMap::new();
    for (no, line) in read_source_lines(path, presence)? {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed(path, no, &line));
        };
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Two-column delimited file without header row. `strip_key_suffix` is removed from
/// keys where present (e.g. `.py` on reco configuration file names).
pub fn load_delimited(
    path: &Path,
    delimiter: u8,
    strip_key_suffix: Option<&str>,
    presence: Presence,
) -> Result<AHashMap<String, String>> {
    let mut map = AHashMap::new();
    let Some(f) = open_source(path, presence)? else {
        return Ok(map);
    };
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(f));
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("read {}", path.display()))?;
        let line = rec.position().map(|p| p.line() as usize).unwrap_or(0);
        if rec.len() == 1 && rec[0].trim().is_empty() {
            continue;
        }
        if rec.len() != 2 {
            return Err(malformed(path, line, &rec.iter().collect::<Vec<_>>().join(",")));
        }
        let mut key = &rec[0];
        if let Some(suffix) = strip_key_suffix {
            key = key.strip_suffix(suffix).unwrap_or(key);
        }
        map.insert(key.to_string(), rec[1].to_string());
    }
    Ok(map)
}

/// A single JSON document with an object at the top level.
pub fn load_json_object(path: &Path, presence: Presence) -> Result<AHashMap<String, Value>> {
    let Some(f) = open_source(path, presence)? else {
        return Ok(AHashMap::new());
    };
    let doc: Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse JSON {}", path.display()))?;
    let Value::Object(obj) = doc else {
        anyhow::bail!("{}: expected a JSON object at top level", path.display());
    };
    Ok(obj.into_iter().collect())
}

/// Reco configuration name -> record id of its configuration-file record.
/// Ids may be strings or numbers; both are kept as strings. Iteration is in key order.
pub fn load_link_table(path: &Path, presence: Presence) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for (key, value) in load_json_object(path, presence)? {
        let recid = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => anyhow::bail!("{}: unexpected record id {} for {}", path.display(), other, key),
        };
        out.insert(key, recid);
    }
    Ok(out)
}

/// Header-blocked list: a line starting with `/` names a dataset, following lines are
/// its values until the next header. Values of each block are sorted; empty blocks are
/// dropped; a repeated header is reported and its later block ignored.
pub fn load_blocked_list(path: &Path, presence: Presence) -> Result<AHashMap<String, Vec<String>>> {
    let mut map: AHashMap<String, Vec<String>> = AHashMap::new();
    let mut current: Option<String> = None;
    let mut values: Vec<String> = Vec::new();

    let mut flush = |header: Option<String>, mut values: Vec<String>| {
        let Some(header) = header else {
            if !values.is_empty() {
                tracing::warn!("{}: {} values before the first dataset header ignored", path.display(), values.len());
            }
            return;
        };
        if map.contains_key(&header) {
            tracing::error!("{} existing several times in the input file.", header);
        } else if !values.is_empty() {
            values.sort();
            map.insert(header, values);
        }
    };

    for (_, line) in read_source_lines(path, presence)? {
        if line.starts_with('/') {
            flush(current.take(), std::mem::take(&mut values));
            current = Some(line);
        } else {
            values.push(line);
        }
    }
    flush(current, values);
    Ok(map)
}
