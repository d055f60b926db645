use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workshop_tracker::filter::WorkshopFilter;
use workshop_tracker::io::excel_read;
use workshop_tracker::layout::{SheetLayout, SheetRole};
use workshop_tracker::render::table;
use workshop_tracker::{Result, TrackerError};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Base(args) => show_base(&args, cli.json),
        Command::Workshops(args) => show_workshops(&args, cli.json),
        Command::Sheets(args) => show_sheets(&args, cli.json),
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| TrackerError::Logging(error.to_string()))
}

fn show_base(args: &BaseArgs, json: bool) -> Result<()> {
    let layout = resolve_layout(&args.file, &None)?;
    let workbook = excel_read::load_workbook(&args.file, &layout)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&workbook.base)?);
    } else {
        println!("{}", table::base_table(&workbook.base));
    }
    Ok(())
}

fn show_workshops(args: &WorkshopArgs, json: bool) -> Result<()> {
    let layout = resolve_layout(&args.file, &args.labels)?;
    let workbook = excel_read::load_workbook(&args.file, &layout)?;
    let filter = WorkshopFilter {
        workshops: args.workshop.clone(),
        offer_elements: args.offer.clone(),
        start: args.start.clone(),
        end: args.end.clone(),
    };
    if json {
        let retained = filter.apply(&workbook.workshops);
        println!("{}", serde_json::to_string_pretty(&retained)?);
    } else {
        println!("{}", table::workshop_table(&workbook.workshops, &filter));
    }
    Ok(())
}

fn show_sheets(args: &BaseArgs, json: bool) -> Result<()> {
    let names = read_sheet_names_checked(&args.file)?;
    let layout = SheetLayout::from_sheet_names(&names);
    if json {
        println!("{}", serde_json::to_string_pretty(layout.bindings())?);
        return Ok(());
    }
    for binding in layout.bindings() {
        let role = match binding.role {
            SheetRole::Base => "base",
            SheetRole::Workshop => "workshop",
        };
        let name = names.get(binding.index).map_or("?", String::as_str);
        println!("{:>2}  {role:<8}  {name}", binding.index);
    }
    Ok(())
}

/// Picks the sheet layout for a load: an explicit `--labels` roster wins,
/// otherwise the layout is detected from the workbook's own sheet names.
fn resolve_layout(file: &Path, labels: &Option<Vec<String>>) -> Result<SheetLayout> {
    if let Some(labels) = labels {
        return Ok(SheetLayout::from_labels(labels.clone()));
    }
    let names = read_sheet_names_checked(file)?;
    Ok(SheetLayout::detect(&names))
}

fn read_sheet_names_checked(file: &Path) -> Result<Vec<String>> {
    if !file.exists() {
        return Err(TrackerError::MissingInput(file.to_path_buf()));
    }
    excel_read::read_sheet_names(file)
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Normalize and filter workshop progress tracker workbooks."
)]
struct Cli {
    /// Emit normalized records as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the base sheet.
    Base(BaseArgs),
    /// Show the aggregated workshop view, optionally filtered.
    Workshops(WorkshopArgs),
    /// List the workbook's sheets and their resolved roles.
    Sheets(BaseArgs),
}

#[derive(clap::Args)]
struct BaseArgs {
    /// Tracker workbook to load.
    file: PathBuf,
}

#[derive(clap::Args)]
struct WorkshopArgs {
    /// Tracker workbook to load.
    file: PathBuf,

    /// Retain only these workshop labels. Repeatable; none means all.
    #[arg(long)]
    workshop: Vec<String>,

    /// Retain only these offer elements. Repeatable; none means all.
    #[arg(long)]
    offer: Vec<String>,

    /// Inclusive lower date-key bound (Excel serial).
    #[arg(long)]
    start: Option<String>,

    /// Inclusive upper date-key bound (Excel serial).
    #[arg(long)]
    end: Option<String>,

    /// Workshop labels bound to sheets 1..=N, overriding the standard roster.
    #[arg(long, value_delimiter = ',')]
    labels: Option<Vec<String>>,
}
