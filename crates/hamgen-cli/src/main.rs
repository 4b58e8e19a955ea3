use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    distance::{self, DistanceArgs},
    enum_template::{self, EnumArgs},
    generate::{self, GenerateArgs},
    suggest::{self, SuggestArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hamgen", about = "Minimum Hamming distance codebook generator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a codebook and print its codewords or a JSON report.
    Generate(GenerateArgs),
    /// Generate values and print them as a C enum declaration.
    Enum(EnumArgs),
    /// Expand an e<width>c<count>h<distance> abbreviation and generate every entry.
    Suggest(SuggestArgs),
    /// Print the Hamming distance between two values.
    Distance(DistanceArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Enum(args) => enum_template::run(&args),
        Command::Suggest(args) => suggest::run(&args),
        Command::Distance(args) => distance::run(&args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
