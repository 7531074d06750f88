use std::io::{Write, stdout};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{Level, info};

use tablekit::app::TableAction;
use tablekit::app::TableState;
use tablekit::app::host::ReferenceHost;
use tablekit::app::sort::active_sort;
use tablekit::error;
use tablekit::infra::{TableOptionsFile, load_table};
use tablekit::logging;
use tablekit::render::render_table;

/// Print one page of a CSV or JSON table, with optional filters, sort and
/// selection applied through the table engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table file (.csv or .json)
    #[arg(long)]
    data: PathBuf,

    /// Options file; defaults to the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column filter as COL=TEXT, COL being a zero-based header index
    #[arg(long = "filter", value_name = "COL=TEXT", value_parser = parse_filter)]
    filters: Vec<(usize, String)>,

    /// Page to show (enables pagination)
    #[arg(long)]
    page: Option<usize>,

    /// Header to click; repeat to cycle the direction
    #[arg(long = "sort", value_name = "COL")]
    sort: Vec<usize>,

    /// Position on the shown page to toggle (enables selection)
    #[arg(long = "select", value_name = "POS")]
    select: Vec<usize>,

    #[arg(long)]
    log_level: Option<Level>,
}

fn parse_filter(raw: &str) -> Result<(usize, String), String> {
    let (column, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected COL=TEXT, got `{raw}`"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("column must be a header index, got `{column}`"))?;
    Ok((column, text.to_string()))
}

fn main() -> Result<()> {
    error::install_hooks()?;
    let args = Args::parse();
    logging::init(args.log_level)?;

    let mut options = match &args.config {
        Some(path) => TableOptionsFile::load(path)?,
        None => TableOptionsFile::load_default()?,
    };
    options.is_filterable |= !args.filters.is_empty();
    options.has_pagination |= args.page.is_some();
    options.selectable |= !args.select.is_empty();

    let data = load_table(&args.data)?;
    info!(
        rows = data.rows.len(),
        columns = data.headers.len(),
        "loaded table"
    );

    let mut host = ReferenceHost::new(data.headers, data.rows);
    let mut state = TableState::new(options, Vec::new(), Vec::new());
    host.attach(&mut state);

    for column in args.sort {
        host.handle(&mut state, TableAction::HeaderClicked(column));
    }
    if let Some(sort) = active_sort(&state.headers) {
        info!(column = sort.column, direction = %sort.direction, "rows sorted");
    }
    for (column, text) in args.filters {
        host.handle(&mut state, TableAction::FilterIconClicked(column));
        host.handle(&mut state, TableAction::FilterDraftSet(text));
        host.handle(&mut state, TableAction::ApplyFilter);
    }
    if let Some(page) = args.page {
        host.handle(&mut state, TableAction::GoToPage(page));
    }
    for position in args.select {
        host.handle(&mut state, TableAction::ToggleRow(position));
    }

    let mut out = stdout().lock();
    writeln!(out, "{}", render_table(&mut state))?;
    Ok(())
}
