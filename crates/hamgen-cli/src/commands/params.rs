use std::path::PathBuf;

use clap::Args;
use hamgen_code::{GenerationParams, Representation};
use hamgen_core::HamgenError;

/// Generation parameters shared by the generating subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// YAML file with generation parameters; flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Codeword width in bits.
    #[arg(long)]
    pub width: Option<u32>,
    /// Number of codewords to generate.
    #[arg(long)]
    pub count: Option<usize>,
    /// Minimum pairwise Hamming distance.
    #[arg(long)]
    pub distance: Option<u32>,
    /// Output representation: binary, decimal or hexadecimal.
    #[arg(long)]
    pub repr: Option<Representation>,
    /// Sampling turns per threshold (used when the timeout is zero).
    #[arg(long)]
    pub iterations: Option<u64>,
    /// Wall-clock budget per threshold in milliseconds; 0 switches to iterations.
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
    /// Lower the distance when the budget runs out instead of stopping.
    #[arg(long)]
    pub allow_reduction: bool,
    /// Keep generating past the requested count until the budget ends.
    #[arg(long)]
    pub auto: bool,
    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ParamArgs {
    /// Layers flags over the config file (or defaults) and validates the outcome.
    pub fn resolve(&self) -> Result<GenerationParams, HamgenError> {
        let mut params = match &self.config {
            Some(path) => GenerationParams::load(path)?,
            None => GenerationParams::default(),
        };
        if let Some(width) = self.width {
            params.bit_width = width;
        }
        if let Some(count) = self.count {
            params.size = count;
        }
        if let Some(distance) = self.distance {
            params.hamming_distance = distance;
        }
        if let Some(repr) = self.repr {
            params.representation = repr;
        }
        if let Some(iterations) = self.iterations {
            params.iteration_budget = iterations;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            params.timeout_ms = timeout_ms;
        }
        params.allow_reduction |= self.allow_reduction;
        params.auto_generate |= self.auto;
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        params.validate()?;
        Ok(params)
    }
}
