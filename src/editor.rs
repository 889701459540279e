use crate::consts::FORM_HEADER;
use crate::exceptions::HivePrefixError;
use crate::models::{BatchResolution, PrefixAssignment};
use std::collections::{HashMap, VecDeque};
use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;

/// Lays out one editable `path<TAB>prefix` row per file, in batch order.
pub fn render_form(batch: &BatchResolution) -> String {
    let mut form = String::from(FORM_HEADER);
    for row in batch {
        form.push_str(&row.path);
        form.push('\t');
        form.push_str(&row.prefix);
        form.push('\n');
    }
    form
}

/// Reads the edited form back against the batch it was rendered from.
///
/// A line is a row when the text before its first tab is a batch path, even if
/// that path starts with `#`; other blank or `#` lines are comments. A path that
/// occurs `n` times in the batch takes up to `n` rows, matched in order. Rows
/// missing from `text` keep their suggested prefix. The result always has the
/// batch's paths in the batch's order.
pub fn parse_form(text: &str, batch: &BatchResolution) -> Result<BatchResolution, HivePrefixError> {
    let normalized = text.replace("\r\n", "\n");

    let mut slots: HashMap<&str, usize> = HashMap::new();
    for path in batch.paths() {
        *slots.entry(path).or_default() += 1;
    }

    let mut edits: HashMap<&str, VecDeque<&str>> = HashMap::new();

    for (line_no, line) in normalized.lines().enumerate() {
        let row = line
            .split_once('\t')
            .filter(|(path, _)| slots.contains_key(path));

        let Some((path, prefix)) = row else {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let reason = match line.split_once('\t') {
                Some((path, _)) => format!("'{}' is not part of this batch", path),
                None => format!("expected `path<TAB>prefix`, got '{}'", line),
            };
            return Err(HivePrefixError::InvalidInput(format!(
                "Line {}: {}",
                line_no + 1,
                reason
            )));
        };

        let queued = edits.entry(path).or_default();
        if queued.len() >= slots[path] {
            return Err(HivePrefixError::InvalidInput(format!(
                "Line {}: '{}' appears more than once",
                line_no + 1,
                path
            )));
        }
        queued.push_back(prefix);
    }

    Ok(BatchResolution::new(
        batch
            .iter()
            .map(|row| PrefixAssignment {
                path: row.path.clone(),
                prefix: edits
                    .get_mut(row.path.as_str())
                    .and_then(VecDeque::pop_front)
                    .map_or_else(|| row.prefix.clone(), str::to_string),
            })
            .collect(),
    ))
}

fn editor_command() -> Result<Vec<String>, HivePrefixError> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".into());
    match shlex::split(&editor) {
        Some(parts) if !parts.is_empty() => Ok(parts),
        Some(_) => Err(HivePrefixError::Configuration(
            "EDITOR environment variable is empty".into(),
        )),
        None => Err(HivePrefixError::Configuration(format!(
            "Failed to parse EDITOR variable: '{}'",
            editor
        ))),
    }
}

/// Opens `content` in `$EDITOR` and returns what was saved.
pub fn run_editor(content: &str) -> Result<String, HivePrefixError> {
    let mut form = tempfile::Builder::new()
        .prefix("hiveprefix-")
        .suffix(".tsv")
        .tempfile()?;
    form.write_all(content.as_bytes())?;
    form.flush()?;

    let command = editor_command()?;
    let (program, args) = command
        .split_first()
        .ok_or_else(|| HivePrefixError::Configuration("EDITOR environment variable is empty".into()))?;

    let status = match Command::new(program).args(args).arg(form.path()).status() {
        Ok(status) => status,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(HivePrefixError::InvalidInput(format!(
                "Editor '{}' not found. Please set $EDITOR.",
                program
            )));
        }
        Err(e) => return Err(e.into()),
    };

    if !status.success() {
        return Err(HivePrefixError::InvalidInput(format!(
            "Editor closed with exit code {}. Aborting.",
            status.code().unwrap_or(1)
        )));
    }

    Ok(fs::read_to_string(form.path())?)
}
