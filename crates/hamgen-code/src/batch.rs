use hamgen_core::{derive_substream_seed, ErrorInfo, HamgenError, RngHandle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abbrev::GridEntry;
use crate::config::GenerationParams;
use crate::search::{generate_codebook, GenerationResult};

/// Result of one grid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Parameters of the job.
    pub entry: GridEntry,
    /// Seed derived for the job.
    pub seed: u64,
    /// Generated codebook.
    pub result: GenerationResult,
}

/// Runs one generation per grid entry on a thread pool.
///
/// Job `i` draws from `derive_substream_seed(master_seed, i)`, so the outcome does
/// not depend on scheduling. Results come back in grid order.
pub fn generate_batch(
    entries: &[GridEntry],
    base: &GenerationParams,
    master_seed: u64,
    concurrency: usize,
) -> Result<Vec<BatchOutcome>, HamgenError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrency.max(1))
        .build()
        .map_err(|err| HamgenError::Rng(ErrorInfo::new("thread-pool", err.to_string())))?;

    debug!(jobs = entries.len(), concurrency, "dispatching batch");
    let outcomes = pool.install(|| {
        entries
            .par_iter()
            .enumerate()
            .map(|(index, entry)| {
                let seed = derive_substream_seed(master_seed, index as u64);
                let mut params = entry.apply_to(base);
                params.seed = Some(seed);
                let mut rng = RngHandle::from_seed(seed);
                BatchOutcome {
                    entry: *entry,
                    seed,
                    result: generate_codebook(&params, &mut rng),
                }
            })
            .collect::<Vec<_>>()
    });
    Ok(outcomes)
}
