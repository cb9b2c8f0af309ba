use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("resources")
        .join("test-fixtures")
}

pub fn load_fixture(relative_path: &str) -> io::Result<Vec<u8>> {
    fs::read(fixtures_root().join(relative_path))
}

pub fn load_fixture_json<T: DeserializeOwned>(relative_path: &str) -> io::Result<T> {
    let bytes = load_fixture(relative_path)?;
    serde_json::from_slice(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Every record fixture, by file name
pub fn record_fixtures() -> io::Result<Vec<(String, Vec<u8>)>> {
    let mut records = Vec::new();
    for entry in fs::read_dir(fixtures_root().join("records"))? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        records.push((name, fs::read(&path)?));
    }
    records.sort();
    Ok(records)
}
