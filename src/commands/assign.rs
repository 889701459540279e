use crate::console::{is_stdin_terminal, print_json, render_table};
use crate::consts::FORCE_EDITOR_ENV;
use crate::editor::{parse_form, render_form, run_editor};
use crate::exceptions::HivePrefixError;
use crate::history::{load_history_strict, save_history};
use crate::merge::merge;
use crate::models::BatchResolution;
use crate::resolver::resolve;
use crate::utils::resolve_history_file;
use std::io::Read;
use std::path::Path;
use tracing::info;

fn apply_overrides(
    suggested: BatchResolution,
    overrides: &[String],
) -> Result<BatchResolution, HivePrefixError> {
    overrides
        .chunks(2)
        .try_fold(suggested, |batch, pair| match pair {
            [file, prefix] if batch.contains(file) => Ok(batch.with_override(file, prefix)),
            [file, _] => Err(HivePrefixError::InvalidInput(format!(
                "--set target '{}' is not one of the files being assigned",
                file
            ))),
            _ => Err(HivePrefixError::InvalidInput(
                "--set expects a FILE and a PREFIX".into(),
            )),
        })
}

fn collect_edits(suggested: &BatchResolution) -> Result<BatchResolution, HivePrefixError> {
    let is_piped = !is_stdin_terminal();
    let force_editor = std::env::var(FORCE_EDITOR_ENV).is_ok();

    let text = if is_piped && !force_editor {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        run_editor(&render_form(suggested))?
    };

    parse_form(&text, suggested)
}

pub fn run(
    files: Vec<String>,
    overrides: Vec<String>,
    no_edit: bool,
    json: bool,
    history_file: Option<&Path>,
) -> Result<(), HivePrefixError> {
    if files.is_empty() {
        return Err(HivePrefixError::InvalidInput(
            "At least one file is required.".into(),
        ));
    }

    let history_path = resolve_history_file(history_file)?;
    let prior = load_history_strict(&history_path)?;

    // 1. Suggest
    let suggested = apply_overrides(resolve(&files, &prior), &overrides)?;

    // 2. Review
    let edited = if no_edit {
        suggested
    } else {
        collect_edits(&suggested)?
    };

    // 3. Merge + persist
    let outcome = merge(&edited, &prior);
    save_history(&history_path, &outcome.updated_history)?;
    info!(
        path = %history_path.display(),
        assigned = outcome.final_mapping.len(),
        remembered = outcome.updated_history.len(),
        "stored prefix choices"
    );

    if json {
        return print_json(&outcome.final_mapping);
    }

    // Rows in the order the files were given
    let rows = edited
        .iter()
        .map(|row| vec![row.path.clone(), row.prefix.clone()]);
    println!("{}", render_table(&["File", "Prefix"], rows));
    Ok(())
}
