//! Run records: canonical JSON + hash of a finished computation.
//!
//! One file per report kind: `<dir>/<kind>.json`. Saving again
//! overwrites. No timestamps in record content (determinism).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use scenario_kernel::report::{canonical_hash, canonical_serialize, Report};
use scenario_kernel::KERNEL_VERSION;

use crate::error::RuntimeError;

/// Run record on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Report kind, also the file stem.
    pub kind: String,
    /// Canonical JSON of the report (UTF-8).
    pub canonical_json: String,
    /// SHA-256 of the canonical JSON.
    pub hash: String,
    /// Kernel version at record time.
    pub kernel_version: u32,
}

fn record_path(dir: &Path, kind: &str) -> PathBuf {
    dir.join(format!("{}.json", kind))
}

/// Write a record of `report` into `dir`, creating it if needed.
pub fn save_record(dir: &Path, report: &Report) -> Result<PathBuf, RuntimeError> {
    fs::create_dir_all(dir)?;

    let canonical_json = String::from_utf8(canonical_serialize(report))
        .expect("canonical JSON is always valid UTF-8");
    let record = RunRecord {
        kind: report.kind().to_string(),
        canonical_json,
        hash: canonical_hash(report),
        kernel_version: KERNEL_VERSION,
    };

    let path = record_path(dir, report.kind());
    let content = serde_json::to_string(&record).expect("record serialization failed");

    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    Ok(path)
}

/// Load the record of `kind` from `dir`.
/// Returns None if no record of that kind exists.
pub fn load_record(dir: &Path, kind: &str) -> Result<Option<RunRecord>, RuntimeError> {
    let path = record_path(dir, kind);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let record = serde_json::from_str(&content)
        .map_err(|source| RuntimeError::Record { path, source })?;
    Ok(Some(record))
}

/// True if the record's hash matches its canonical JSON content.
pub fn verify_record_hash(record: &RunRecord) -> bool {
    let digest = Sha256::digest(record.canonical_json.as_bytes());
    let computed: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    computed == record.hash
}
