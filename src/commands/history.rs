use crate::console::{print_json, render_table};
use crate::exceptions::HivePrefixError;
use crate::history::{load_history_strict, save_history};
use crate::models::PrefixHistory;
use crate::utils::resolve_history_file;
use std::path::Path;

pub fn run(
    forget: Vec<String>,
    clear: bool,
    json: bool,
    history_file: Option<&Path>,
) -> Result<(), HivePrefixError> {
    let history_path = resolve_history_file(history_file)?;
    let history = load_history_strict(&history_path)?;

    if clear {
        let removed = history.len();
        save_history(&history_path, &PrefixHistory::new())?;
        println!("Cleared {} remembered prefix(es).", removed);
        return Ok(());
    }

    if !forget.is_empty() {
        let mut missing = false;
        for path in &forget {
            if history.contains(path) {
                println!("Forgot prefix for: {}", path);
            } else {
                eprintln!("Error: No remembered prefix for: {}", path);
                missing = true;
            }
        }

        let pruned = history.without(forget.iter().map(String::as_str));
        if pruned.len() != history.len() {
            save_history(&history_path, &pruned)?;
        }

        if missing {
            return Err(HivePrefixError::InvalidInput(
                "One or more files had no remembered prefix.".into(),
            ));
        }
        return Ok(());
    }

    if json {
        return print_json(&history);
    }

    if history.is_empty() {
        println!("No prefixes are currently remembered.");
        return Ok(());
    }

    let rows = history
        .iter()
        .map(|(path, prefix)| vec![path.to_string(), prefix.to_string()]);
    println!("{}", render_table(&["File", "Prefix"], rows));
    Ok(())
}

/// Paths with a remembered prefix, for shell completion.
pub fn remembered_paths(history_file: Option<&Path>) -> Vec<String> {
    resolve_history_file(history_file)
        .ok()
        .and_then(|path| load_history_strict(&path).ok())
        .map(|history| history.iter().map(|(path, _)| path.to_string()).collect())
        .unwrap_or_default()
}
