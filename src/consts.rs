pub const APP_NAME: &str = "hiveprefix";

pub const HISTORY_FILE_NAME: &str = "prefix_history.json";

/// Name of the single setting holding the flattened `path, prefix, path, prefix, ...` list.
pub const HISTORY_SETTING_KEY: &str = "previous_prefixes";

// --- Environment ---

pub const HISTORY_FILE_ENV: &str = "HIVEPREFIX_HISTORY_FILE";
pub const FORCE_EDITOR_ENV: &str = "HIVEPREFIX_FORCE_EDITOR";
pub const COLUMNS_ENV: &str = "HIVEPREFIX_COLUMNS";
pub const LOG_ENV: &str = "HIVEPREFIX_LOG";

// --- Partition paths ---

/// Separates key from value in a partition directory name (`year=2021`).
pub const PARTITION_DELIMITER: char = '=';

/// Joins partition values in an inferred prefix (`/2021/03`).
pub const PREFIX_SEPARATOR: char = '/';

// --- Edit form ---

pub const FORM_HEADER: &str = "# Review the prefix for each file, one `path<TAB>prefix` row per file.\n\
# Only the text after the tab is editable. Lines starting with '#' are ignored.\n\
# Removing a row keeps the suggested prefix for that file.\n";
