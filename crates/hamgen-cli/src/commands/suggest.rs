use std::error::Error;

use clap::Args;
use hamgen_code::{generate_batch, Abbreviation};
use tracing::info;

use super::params::ParamArgs;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Abbreviation such as e16, e16c4 or e16c4h3.
    pub abbreviation: Abbreviation,
    #[command(flatten)]
    pub params: ParamArgs,
    /// Worker threads used for the grid.
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,
}

pub fn run(args: &SuggestArgs) -> Result<(), Box<dyn Error>> {
    let base = args.params.resolve()?;
    let grid = args.abbreviation.expand();
    let master_seed = base.seed.unwrap_or(0);
    info!(entries = grid.len(), jobs = args.jobs, "expanding suggestion grid");
    for outcome in generate_batch(&grid, &base, master_seed, args.jobs)? {
        let entry = outcome.entry;
        let achieved = outcome
            .result
            .achieved_distance
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "{}-bit enum count {}, dis {}: achieved {} [{}]",
            entry.bit_width,
            entry.size,
            entry.hamming_distance,
            achieved,
            outcome.result.codewords.join(", ")
        );
    }
    Ok(())
}
