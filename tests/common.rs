use hiveprefix::history::save_history;
use hiveprefix::models::PrefixHistory;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn history_path(root: &Path) -> PathBuf {
    root.join("config").join("prefix_history.json")
}

#[allow(dead_code)]
pub fn seed_history(path: &Path, pairs: &[(&str, &str)]) {
    let history: PrefixHistory = pairs.iter().copied().collect();
    save_history(path, &history).unwrap();
}

#[allow(dead_code)]
pub fn read_flat_history(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    serde_json::from_value(value["previous_prefixes"].clone()).unwrap()
}
