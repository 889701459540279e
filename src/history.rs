use crate::consts::HISTORY_SETTING_KEY;
use crate::exceptions::HivePrefixError;
use crate::fs::{atomic_write_json, read_json, set_owner_only};
use crate::models::PrefixHistory;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// On-disk layout: one named setting holding `path, prefix, path, prefix, ...`.
#[derive(Serialize, Deserialize, Default)]
struct HistorySettings {
    #[serde(default)]
    previous_prefixes: Vec<String>,
}

pub fn flatten(history: &PrefixHistory) -> Vec<String> {
    history
        .iter()
        .flat_map(|(path, prefix)| [path.to_string(), prefix.to_string()])
        .collect()
}

/// Rebuilds a history from the flattened list. A trailing key without a value is
/// dropped; when a path repeats, the later pair wins.
pub fn unflatten(values: &[String]) -> PrefixHistory {
    let pairs = values.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        warn!(
            setting = HISTORY_SETTING_KEY,
            "ignoring unpaired trailing entry in prefix history"
        );
    }
    pairs
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

fn read_history(path: &Path) -> Result<PrefixHistory, HivePrefixError> {
    let settings: HistorySettings = read_json(path)?;
    Ok(unflatten(&settings.previous_prefixes))
}

/// Loads remembered prefixes. A missing file is a first run; a broken file is
/// reported and treated as empty so a batch can still proceed.
pub fn load_history(path: &Path) -> PrefixHistory {
    if !path.exists() {
        debug!(path = %path.display(), "no prefix history yet");
        return PrefixHistory::new();
    }

    match read_history(path) {
        Ok(history) => {
            debug!(path = %path.display(), entries = history.len(), "loaded prefix history");
            history
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable prefix history, starting empty");
            PrefixHistory::new()
        }
    }
}

/// Like [`load_history`], but surfaces read and parse failures.
pub fn load_history_strict(path: &Path) -> Result<PrefixHistory, HivePrefixError> {
    if !path.exists() {
        return Ok(PrefixHistory::new());
    }
    read_history(path).map_err(|e| {
        HivePrefixError::History(format!("Failed to read {}: {}", path.display(), e))
    })
}

pub fn save_history(path: &Path, history: &PrefixHistory) -> Result<(), HivePrefixError> {
    let settings = HistorySettings {
        previous_prefixes: flatten(history),
    };

    atomic_write_json(path, &settings)?;
    set_owner_only(path);

    debug!(path = %path.display(), entries = history.len(), "saved prefix history");
    Ok(())
}
