//! Plain-text rendering of the current page.

use std::fmt::Write;

use tablekit_app::TableState;
use tablekit_domain::{FilterState, HeaderDefinition, SortDirection};

const SEPARATOR: &str = " | ";
const EMPTY_PLACEHOLDER: &str = "No data";

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn header_label(column: usize, header: &HeaderDefinition, filters: &FilterState) -> String {
    let mut label = header.text.clone();
    match header.sort_direction {
        SortDirection::Asc => label.push_str(" ^"),
        SortDirection::Desc => label.push_str(" v"),
        SortDirection::None => {}
    }
    if let Some(value) = filters.get(column) {
        let _ = write!(label, " [{value}]");
    }
    label
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(SEPARATOR);
        }
        let width = widths.get(i).copied().unwrap_or(0);
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Header line, one line per visible row (or the placeholder), and a footer
/// with the page position.
pub fn render_table(state: &mut TableState) -> String {
    let filters = state.filters.resolve().clone();
    let selectable = state.options.selectable;
    let paginated = state.options.has_pagination;
    let view = state.view();

    let mut header_cells: Vec<String> = Vec::with_capacity(view.effective_columns());
    if selectable {
        header_cells.push(checkbox(view.all_visible_selected()).to_string());
    }
    header_cells.extend(
        view.headers
            .iter()
            .enumerate()
            .map(|(column, header)| header_label(column, header, &filters)),
    );

    let body: Vec<Vec<String>> = view
        .visible_rows()
        .map(|visible| {
            let mut cells = Vec::with_capacity(header_cells.len());
            if selectable {
                cells.push(checkbox(visible.selected).to_string());
            }
            cells.extend(visible.row.iter().map(|cell| cell.text.clone()));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header_cells.iter().map(|c| c.chars().count()).collect();
    for cells in &body {
        for (i, cell) in cells.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header_cells, &widths);
    if view.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
    }
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }

    if paginated {
        let pagination = view.pagination();
        let _ = write!(
            out,
            "page {}/{}, {} rows",
            pagination.current_page,
            pagination.total_pages(),
            pagination.total_items
        );
    } else {
        let _ = write!(out, "{} rows", view.filtered_len());
    }
    out
}
