use crate::models::{BatchResolution, MergeOutcome, PrefixHistory};
use std::collections::BTreeMap;
use tracing::debug;

/// Folds the user's final choices into the remembered history.
///
/// Every edited row overwrites the history entry for its path; entries for paths
/// outside the batch are carried over untouched.
pub fn merge(edited: &BatchResolution, prior: &PrefixHistory) -> MergeOutcome {
    let final_mapping: BTreeMap<String, String> = edited
        .iter()
        .map(|row| (row.path.clone(), row.prefix.clone()))
        .collect();

    let updated_history: PrefixHistory = prior
        .iter()
        .filter(|(path, _)| !final_mapping.contains_key(*path))
        .map(|(path, prefix)| (path.to_string(), prefix.to_string()))
        .chain(final_mapping.clone())
        .collect();

    debug!(
        edited = final_mapping.len(),
        prior = prior.len(),
        updated = updated_history.len(),
        "merged prefix history"
    );

    MergeOutcome {
        final_mapping,
        updated_history,
    }
}
