use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use hamgen_code::{generate_codebook, GenerationReport};
use hamgen_core::RngHandle;
use tracing::info;

use super::params::ParamArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One codeword per line.
    Text,
    /// Full report with provenance, diagnostics and statistics.
    Json,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write output to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let params = args.params.resolve()?;
    let mut rng = RngHandle::from_optional_seed(params.seed);
    let result = generate_codebook(&params, &mut rng);
    info!(
        found = result.codewords.len(),
        achieved = ?result.achieved_distance,
        stop = ?result.stats.stop_reason,
        "generation finished"
    );

    let body = match args.format {
        OutputFormat::Text => {
            let mut text = result.codewords.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            text
        }
        OutputFormat::Json => {
            let mut json = GenerationReport::new(&params, result)?.to_json()?;
            json.push('\n');
            json
        }
    };

    match &args.out {
        Some(path) => fs::write(path, body)?,
        None => print!("{body}"),
    }
    Ok(())
}
