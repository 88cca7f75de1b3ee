pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "siza",
    about = "Siza voice shopper operator CLI",
    long_about = "Inspect configuration, check readiness, and exercise the shopping tools \
                  against the built-in grocery catalog.",
    after_help = "Examples:\n  siza doctor --json\n  siza search tomato\n  siza tools"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config, the catalog, and the tool registry")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Print the full catalog as returned by the get_catalog tool")]
    Catalog,
    #[command(about = "Run the search_products tool and print its result")]
    Search {
        #[arg(help = "Case-insensitive search term, e.g. `tomato` or `dairy`")]
        query: String,
    },
    #[command(about = "Print the tool definitions offered to the model")]
    Tools,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
        Command::Catalog => commands::catalog::run(),
        Command::Search { query } => commands::search::run(&query),
        Command::Tools => commands::tools::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
