#![deny(missing_docs)]
#![doc = "Randomized construction of fixed-width binary codebooks with a minimum pairwise Hamming distance."]

/// Parameter abbreviations and suggestion grids.
pub mod abbrev;
/// Parallel generation over a parameter grid.
pub mod batch;
/// Budget windows for the search loop.
pub mod budget;
/// Ordered codebook container and verification helpers.
pub mod codebook;
/// Generation parameters and YAML loading.
pub mod config;
/// Canonical hashing helpers.
pub mod hash;
/// Serializable run reports.
pub mod report;
/// Text representations of codewords.
pub mod repr;
/// Candidate sampling.
pub mod sampler;
/// Acceptance search and results.
pub mod search;
/// Canonical JSON helpers.
pub mod serde;
/// Background generation with cancellation.
pub mod task;
/// C enum rendering of generated values.
pub mod template;
/// Fixed-width codewords and Hamming distance.
pub mod word;

pub use abbrev::{Abbreviation, GridEntry};
pub use batch::{generate_batch, BatchOutcome};
pub use codebook::Codebook;
pub use config::{BudgetMode, GenerationParams};
pub use hash::canonical_codebook_hash;
pub use report::GenerationReport;
pub use repr::Representation;
pub use sampler::{CandidateSampler, UniformSampler};
pub use search::{
    generate_codebook, generate_codebook_until, search, Diagnostic, GenerationResult, Outcome,
    SearchStats, StopReason, StopSignal,
};
pub use task::{spawn_generation, GenerationHandle};
pub use template::EnumTemplate;
pub use word::{hamming_distance, Codeword};
