mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nspire",
    version,
    about = "NSPIRE property inspection scoring tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an inspection JSON file
    Score {
        /// Path to inspection JSON file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show all findings, not just voucher failures
        #[arg(long)]
        show_all: bool,

        /// Show per-finding severity, deductions and repair deadlines
        #[arg(long)]
        verbose: bool,
    },
    /// Look up the required unit sample for a property size
    Sample {
        /// Total dwelling units on the property
        total_units: i64,
    },
    /// Manage and inspect deficiency catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the built-in catalog's categories
    List,
    /// Print catalog entries, optionally for one category
    Explain {
        /// Category key (e.g., "fire_life_safety")
        category: Option<String>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            input_file,
            output,
            show_all,
            verbose,
        } => commands::score::run(input_file, &output, show_all, verbose),
        Commands::Sample { total_units } => commands::sample::run(total_units),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { category } => commands::catalog::explain(category.as_deref()),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
