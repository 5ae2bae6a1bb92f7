mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astrokit", about = "Astrophotography file templates and colour tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a template into its static root and remaining pattern
    Split(commands::split::SplitArgs),
    /// Match paths against a template and print the captured values
    Match(commands::matching::MatchArgs),
    /// Discover channel files on disk that match a template
    Scan(commands::scan::ScanArgs),
    /// Convert a colour between RGB, HSV and HSL
    Color(commands::color::ColorArgs),
    /// Print or save a default scan config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Split(args) => commands::split::run(args),
        Commands::Match(args) => commands::matching::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Color(args) => commands::color::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
