// Rust Timetable Application
// Main entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rust_timetable::models::day::Day;
use rust_timetable::models::settings::ScheduleCatalog;
use rust_timetable::services::event::EventStore;
use rust_timetable::services::print::{PrintOptions, TextTable};
use rust_timetable::services::schedule::ScheduleView;
use rust_timetable::services::settings::SettingsService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Render a weekly class timetable from a JSON list of events.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// JSON file with an array of events. Without it an empty timetable is shown.
    events: Option<PathBuf>,

    /// Timetable config (TOML). Defaults to the platform config directory.
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only show these days (repeatable).
    #[arg(long = "day", short = 'd', value_name = "DAY")]
    days: Vec<Day>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Leave empty cells out of the text output.
    #[arg(long, default_value_t = false)]
    hide_empty: bool,

    /// Leave the legend out of the text output.
    #[arg(long, default_value_t = false)]
    no_legend: bool,

    /// Write the built-in default config to FILE and exit.
    #[arg(long, value_name = "FILE")]
    write_default_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Rust Timetable");

    if let Some(path) = &cli.write_default_config {
        SettingsService::save(path, &Default::default())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut catalog = SettingsService::load_catalog(cli.config.as_deref())?;
    if !cli.days.is_empty() {
        catalog = ScheduleCatalog::new(catalog.slots().clone(), cli.days.clone())
            .context("Invalid --day selection")?;
    }

    let store = match &cli.events {
        Some(path) => EventStore::load_json(path)?,
        None => EventStore::new(),
    };

    let mut view = ScheduleView::new(catalog);
    let grid = view.grid(&store.snapshot());

    match cli.format {
        OutputFormat::Text => {
            let options = PrintOptions {
                show_legend: !cli.no_legend,
                show_empty: !cli.hide_empty,
            };
            print!("{}", TextTable::with_options(&grid, options));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&*grid)
                .context("Failed to serialize timetable")?;
            println!("{}", json);
        }
    }

    Ok(())
}
