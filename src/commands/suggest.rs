use crate::console::{print_json, render_table};
use crate::exceptions::HivePrefixError;
use crate::history::load_history;
use crate::resolver::resolve_with_origin;
use crate::utils::resolve_history_file;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct SuggestionRow<'a> {
    path: &'a str,
    prefix: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
}

pub fn run(
    files: Vec<String>,
    history_file: Option<&Path>,
    json: bool,
    explain: bool,
) -> Result<(), HivePrefixError> {
    let history_path = resolve_history_file(history_file)?;
    let history = load_history(&history_path);
    let resolved = resolve_with_origin(&files, &history);

    if json {
        let rows: Vec<SuggestionRow> = resolved
            .iter()
            .map(|(row, origin)| SuggestionRow {
                path: &row.path,
                prefix: &row.prefix,
                origin: explain.then(|| origin.to_string()),
            })
            .collect();
        return print_json(&rows);
    }

    let header: &[&str] = if explain {
        &["File", "Source", "Prefix"]
    } else {
        &["File", "Prefix"]
    };

    let rows = resolved.into_iter().map(|(row, origin)| {
        if explain {
            vec![row.path, origin.to_string(), row.prefix]
        } else {
            vec![row.path, row.prefix]
        }
    });

    println!("{}", render_table(header, rows));
    Ok(())
}
