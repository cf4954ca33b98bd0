//! Super-League Draft Generator CLI
//!
//! Derives the edited players dataset and runs the tiered league draft
//! against it, writing the draft table and its run metadata.

mod dataset;
mod paths;
mod table_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use draft_core::{Criteria, DraftSummary};

use crate::paths::DraftPaths;

const BANNER_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "draft_cli")]
#[command(about = "Generate a tiered super-league draft from a players dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the filtered players dataset (Name, Nation, Club, Position, Age, Overall)
    Dataset,
    /// Run the super-league draft and write super_draft.csv
    Draft {
        /// Seed for a reproducible draft; omitted, every run differs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    print_welcome();

    let cli = Cli::parse();
    match cli.command {
        Commands::Dataset => create_dataset(),
        Commands::Draft { seed } => create_draft(seed),
    }
}

fn create_dataset() -> Result<()> {
    banner("Create Dataset");

    let paths = DraftPaths::from_env()?;
    let source = paths.source_dataset();
    let target = paths.edited_dataset();
    println!("Source dataset: {}\n", source.display());

    if target.exists() {
        println!("File already exists: {}. Overwriting...\n", target.display());
    }

    let stats = dataset::derive_dataset(&source, &target)?;
    println!("Processed file saved as: {}", target.display());
    println!(
        "({} players kept, {} rows skipped)\n",
        stats.rows, stats.skipped
    );
    Ok(())
}

fn create_draft(seed: Option<u64>) -> Result<()> {
    banner("Create Draft");

    let paths = DraftPaths::from_env()?;
    let input = paths.input_dataset()?;
    println!("Loading players from: {}", input.display());

    let pool = dataset::load_players(&input)?;
    println!("Loaded {} players\n", pool.len());

    let criteria = Criteria::default();
    println!(
        "Criteria: {} leagues, {} team slots",
        criteria.leagues,
        criteria.total_slots()
    );

    let output = paths.draft_output();
    let mut store = table_store::CsvTableRepository::new(output.clone());
    let summary = draft_core::run_draft(&mut store, &pool, &criteria, draft_core::draft_rng(seed))
        .context("draft run failed")?;

    println!("\nSuper draft CSV file created at: {}\n", output.display());
    print_summary(&summary);
    write_metadata(&paths, &summary, seed)?;
    Ok(())
}

fn print_summary(summary: &DraftSummary) {
    println!("Slots filled per position ({} rows):", summary.rows);
    for column in &summary.columns {
        println!("  {:<4} {:>3}/{}", column.role, column.filled, summary.rows);
    }
}

#[derive(serde::Serialize)]
struct DraftMetadata<'a> {
    created_at: String,
    seed: Option<u64>,
    rows: usize,
    columns: &'a [draft_core::ColumnSummary],
}

fn write_metadata(paths: &DraftPaths, summary: &DraftSummary, seed: Option<u64>) -> Result<()> {
    let metadata = DraftMetadata {
        created_at: chrono::Utc::now().to_rfc3339(),
        seed,
        rows: summary.rows,
        columns: &summary.columns,
    };
    let path = paths.metadata_output();
    std::fs::write(&path, serde_json::to_string_pretty(&metadata)?)
        .with_context(|| format!("failed to write draft metadata: {}", path.display()))?;
    println!("\nDraft metadata saved to: {}", path.display());
    Ok(())
}

fn print_welcome() {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!(
        "{:^width$}",
        "Super-League Draft Generator",
        width = BANNER_WIDTH
    );
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
}

fn banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{:^width$}", title, width = BANNER_WIDTH);
    println!("{}", "=".repeat(BANNER_WIDTH));
}
