//! Prefix inference from hive-style partition directories (`key=value`).

use crate::consts::{PARTITION_DELIMITER, PREFIX_SEPARATOR};
use crate::models::Prefix;

/// Splits `path` into its ancestor directory names and its final segment.
///
/// Purely lexical. Empty segments from repeated separators (or a leading root
/// separator) are dropped from the ancestors; a trailing separator leaves an
/// empty final segment.
pub fn path_segments(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = path.split(std::path::is_separator).collect();
    let file_name = segments.pop().unwrap_or("");
    segments.retain(|segment| !segment.is_empty());
    (segments, file_name)
}

/// The text after the first `=` of a partition directory name, or `None` when
/// the name is not a partition directory.
pub fn partition_value(segment: &str) -> Option<&str> {
    segment
        .split_once(PARTITION_DELIMITER)
        .map(|(_key, value)| value)
}

/// Walks up from the file through consecutive `key=value` directories and joins
/// their values root-most first: `/data/year=2021/month=03/temp.csv` gives
/// `/2021/03`.
///
/// Returns `None` when the file's containing directory is not a partition
/// directory. The walk stops at the first ancestor without `=`; nothing above
/// it is looked at.
pub fn infer_partition_prefix(path: &str) -> Option<Prefix> {
    let (ancestors, _file_name) = path_segments(path);

    let values: Vec<&str> = ancestors
        .into_iter()
        .rev()
        .map_while(partition_value)
        .collect();

    if values.is_empty() {
        return None;
    }

    let capacity = values.iter().map(|v| v.len() + 1).sum();
    let prefix = values
        .iter()
        .rev()
        .fold(String::with_capacity(capacity), |mut acc, value| {
            acc.push(PREFIX_SEPARATOR);
            acc.push_str(value);
            acc
        });

    Some(prefix)
}
