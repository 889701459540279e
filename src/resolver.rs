use crate::models::{BatchResolution, FilePath, PrefixAssignment, PrefixHistory, PrefixOrigin};
use crate::partition::{infer_partition_prefix, path_segments};
use tracing::debug;

/// The final path segment up to its first `.`: `archive.tar.gz` gives `archive`,
/// `.hidden` gives an empty string.
pub fn file_base_name(path: &str) -> &str {
    let (_, file_name) = path_segments(path);
    file_name
        .split_once('.')
        .map_or(file_name, |(base, _extension)| base)
}

/// Suggests a prefix for one file. Partition inference wins over history, which
/// wins over the base name.
pub fn resolve_one(path: &str, history: &PrefixHistory) -> (String, PrefixOrigin) {
    if let Some(inferred) = infer_partition_prefix(path) {
        return (inferred, PrefixOrigin::Partition);
    }

    if let Some(remembered) = history.get(path) {
        return (remembered.to_string(), PrefixOrigin::History);
    }

    (file_base_name(path).to_string(), PrefixOrigin::BaseName)
}

/// Like [`resolve`], but keeps the rule that produced each suggestion.
pub fn resolve_with_origin(
    paths: &[FilePath],
    history: &PrefixHistory,
) -> Vec<(PrefixAssignment, PrefixOrigin)> {
    paths
        .iter()
        .map(|path| {
            let (prefix, origin) = resolve_one(path, history);
            debug!(path = %path, prefix = %prefix, %origin, "resolved prefix");
            (
                PrefixAssignment {
                    path: path.clone(),
                    prefix,
                },
                origin,
            )
        })
        .collect()
}

/// One suggested prefix per input path, in input order.
pub fn resolve(paths: &[FilePath], history: &PrefixHistory) -> BatchResolution {
    BatchResolution::new(
        resolve_with_origin(paths, history)
            .into_iter()
            .map(|(row, _)| row)
            .collect(),
    )
}
