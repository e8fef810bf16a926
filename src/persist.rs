use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store::Record;

pub const ENVELOPE_VERSION: u32 = 1;

/// Versioned on-disk layout: one JSON file per page mirroring its record
/// collection. A version bump invalidates old payloads deterministically
/// instead of guessing at shapes.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    records: Vec<T>,
}

pub fn page_path(slug: &str) -> PathBuf {
    get_data_dir().join(format!("{slug}.json"))
}

/// Load a page's records, falling back to `fixtures` when the file is
/// missing, unreadable, malformed, or from another envelope version.
/// Corrupt data is never fatal; a version mismatch is reported since it
/// means a deliberate payload exists that we are discarding.
pub fn load_or_else<T: Record>(path: &Path, fixtures: impl FnOnce() -> Vec<T>) -> Vec<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return fixtures(),
    };
    match serde_json::from_str::<Envelope<T>>(&content) {
        Ok(envelope) if envelope.version == ENVELOPE_VERSION => envelope.records,
        Ok(envelope) => {
            eprintln!(
                "{}",
                format!(
                    "warning: {} holds version {} data (expected {}), using defaults",
                    path.display(),
                    envelope.version,
                    ENVELOPE_VERSION
                )
                .dimmed()
            );
            fixtures()
        }
        Err(_) => fixtures(),
    }
}

/// Serialize the full collection. Called after every mutation; best-effort —
/// the caller surfaces the error in a status line and carries on.
pub fn save<T: Record>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let envelope = Envelope {
        version: ENVELOPE_VERSION,
        records: records.to_vec(),
    };
    let json = serde_json::to_string_pretty(&envelope)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
