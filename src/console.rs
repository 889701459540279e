use crate::consts::COLUMNS_ENV;
use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ColumnConstraint, ContentArrangement, Table, Width};
use std::io::IsTerminal;

pub fn is_stdout_terminal() -> bool {
    std::io::stdout().is_terminal()
}

pub fn is_stdin_terminal() -> bool {
    std::io::stdin().is_terminal()
}

fn width_from_env(var: &str) -> Option<usize> {
    std::env::var(var)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
}

/// Table width: an explicit column override wins over the tty size; 80 otherwise.
pub fn get_terminal_width() -> usize {
    static TERMINAL_WIDTH: std::sync::LazyLock<usize> = std::sync::LazyLock::new(|| {
        [COLUMNS_ENV, "COLUMNS"]
            .into_iter()
            .find_map(width_from_env)
            .or_else(|| {
                is_stdout_terminal()
                    .then(crossterm::terminal::size)
                    .and_then(Result::ok)
                    .map(|(w, _)| usize::from(w))
            })
            .unwrap_or(80)
    });

    *TERMINAL_WIDTH
}

/// Borderless table whose last column soaks up the remaining width.
pub fn render_table<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_width(get_terminal_width().min(u16::MAX as usize) as u16)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        header
            .iter()
            .map(|title| Cell::new(title).add_attribute(Attribute::Bold)),
    );

    for row in rows {
        table.add_row(row);
    }

    let last = header.len().saturating_sub(1);
    for (idx, column) in table.column_iter_mut().enumerate() {
        if idx == last {
            column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(8)));
        } else {
            column.set_constraint(ColumnConstraint::ContentWidth);
        }
    }

    table.to_string()
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), crate::exceptions::HivePrefixError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
