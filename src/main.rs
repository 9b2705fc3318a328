mod cli;
mod db;
mod error;
mod export;
mod importer;
mod models;
mod parser;
mod reports;
mod settings;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import { file } => cli::import::run(&file),
        Commands::Export { output } => cli::export::run(output),
        Commands::Report { command } => match command {
            ReportCommands::Monthly { json } => cli::report::monthly(json),
            ReportCommands::Countries { json } => cli::report::countries(json),
        },
        Commands::Process { input, output } => cli::process::run(&input, output),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
