//! Randomized incremental-acceptance search for minimum-distance codebooks.
//!
//! Each turn runs the termination checks, draws an unseen candidate and accepts it
//! when it keeps the current distance threshold against every accepted word. When
//! the budget of a threshold expires the search either stops or, with relaxation
//! enabled, lowers the threshold by one and opens a new budget window.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::budget::BudgetGuard;
use crate::codebook::Codebook;
use crate::config::GenerationParams;
use crate::repr::Representation;
use crate::sampler::{CandidateSampler, UniformSampler};
use crate::word::Codeword;

/// Shared flag that asks a running search to stop at the next turn.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    /// Creates an unset signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the search to stop.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns true once [`StopSignal::stop`] was called.
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Why the search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// The requested number of codewords was reached.
    TargetReached,
    /// The budget expired and relaxation was disabled.
    #[default]
    BudgetExhausted,
    /// Every value of the bit width was already tested and relaxation was disabled.
    CandidatesExhausted,
    /// The threshold could not be lowered any further.
    RelaxationExhausted,
    /// A [`StopSignal`] was raised.
    Cancelled,
    /// The requested distance was not below the bit width.
    Infeasible,
}

/// Counters collected while searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchStats {
    /// Loop turns that passed the termination checks.
    pub turns: u64,
    /// Distinct candidates run through the acceptance test.
    pub candidates_tested: u64,
    /// Draws discarded because the candidate had been seen before.
    pub duplicate_draws: u64,
    /// Candidates accepted into the codebook.
    pub accepted: u64,
    /// Candidates rejected by the acceptance test.
    pub rejected: u64,
    /// Number of threshold relaxations.
    pub relaxations: u32,
    /// Wall-clock duration of the whole search.
    pub elapsed_ms: u64,
    /// Reason the loop ended.
    pub stop_reason: StopReason,
}

/// Advisory findings reported alongside a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Not a single codeword was accepted.
    NoCodewords,
    /// Fewer codewords than requested were found.
    Shortfall {
        /// Codewords found.
        found: usize,
        /// Codewords requested.
        requested: usize,
        /// Threshold that governed the search at the end.
        distance: u32,
    },
    /// The threshold had to be lowered below the request.
    Relaxed {
        /// Distance originally requested.
        requested: u32,
        /// Distance reached at the end.
        achieved: u32,
        /// Codewords found.
        found: usize,
    },
}

impl Diagnostic {
    /// Operator facing description.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::NoCodewords => {
                "could not generate any codes with the given parameters".to_string()
            }
            Diagnostic::Shortfall {
                found, distance, ..
            } => format!(
                "could not find more than {found} code(s) with minimum hamming distance of {distance} between them"
            ),
            Diagnostic::Relaxed {
                achieved, found, ..
            } => format!(
                "could not generate {found} code(s) with minimum hamming distance of more than {achieved} between them"
            ),
        }
    }
}

/// Coarse classification of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// At least `size` codewords at the requested distance.
    Complete,
    /// Some codewords, but fewer than requested or at a relaxed distance.
    Partial,
    /// No codebook was produced.
    Empty,
}

/// Codebook rendered for the caller plus the distance it is guaranteed to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Representation used for `codewords`.
    pub representation: Representation,
    /// Distance originally requested.
    pub requested_distance: u32,
    /// Codewords requested.
    pub requested_size: usize,
    /// Rendered codewords in acceptance order; empty when nothing was produced.
    pub codewords: Vec<String>,
    /// Final threshold of the search; `None` when nothing was produced.
    pub achieved_distance: Option<u32>,
    /// Accepted codewords as bit strings.
    pub codebook: Codebook,
    /// Advisory findings.
    pub diagnostics: Vec<Diagnostic>,
    /// Search counters.
    pub stats: SearchStats,
}

impl GenerationResult {
    fn empty(params: &GenerationParams, stats: SearchStats) -> Self {
        Self {
            representation: params.representation,
            requested_distance: params.hamming_distance,
            requested_size: params.size,
            codewords: Vec::new(),
            achieved_distance: None,
            codebook: Codebook::new(params.bit_width),
            diagnostics: Vec::new(),
            stats,
        }
    }

    /// True when no codebook was produced.
    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Classifies the result.
    pub fn outcome(&self) -> Outcome {
        match self.achieved_distance {
            None => Outcome::Empty,
            Some(distance)
                if distance >= self.requested_distance
                    && self.codewords.len() >= self.requested_size =>
            {
                Outcome::Complete
            }
            Some(_) => Outcome::Partial,
        }
    }
}

/// Generates a codebook with candidates drawn uniformly from `rng`.
pub fn generate_codebook<R: RngCore + ?Sized>(
    params: &GenerationParams,
    rng: &mut R,
) -> GenerationResult {
    let mut sampler = UniformSampler::new(rng);
    search(params, &mut sampler, &StopSignal::new())
}

/// Like [`generate_codebook`], but stops early once `stop` is raised.
pub fn generate_codebook_until<R: RngCore + ?Sized>(
    params: &GenerationParams,
    rng: &mut R,
    stop: &StopSignal,
) -> GenerationResult {
    let mut sampler = UniformSampler::new(rng);
    search(params, &mut sampler, stop)
}

/// Runs the acceptance search against an arbitrary candidate source.
///
/// Resampling a candidate that was already seen is an unbounded retry within the
/// turn. It slows down as the seen set approaches the size of the whole space, so
/// a fully covered space is detected and treated as an expired budget.
pub fn search<S: CandidateSampler + ?Sized>(
    params: &GenerationParams,
    sampler: &mut S,
    stop: &StopSignal,
) -> GenerationResult {
    let started = Instant::now();
    let mut stats = SearchStats::default();

    if !params.is_feasible() {
        stats.stop_reason = StopReason::Infeasible;
        return GenerationResult::empty(params, stats);
    }

    let width = params.bit_width;
    let space = candidate_space(width);
    let mut threshold = params.hamming_distance;
    let mut budget = BudgetGuard::new(params.budget_mode());
    let mut seen: HashSet<Codeword> = HashSet::new();
    let mut codebook = Codebook::new(width);

    debug!(
        bit_width = width,
        size = params.size,
        hamming_distance = threshold,
        budget = ?params.budget_mode(),
        "starting codebook search"
    );

    let reason = loop {
        if stop.is_stopped() {
            break StopReason::Cancelled;
        }
        if codebook.len() >= params.size && !params.auto_generate {
            break StopReason::TargetReached;
        }

        let exhausted = space.is_some_and(|total| seen.len() >= total);
        if budget.tick() || exhausted {
            if !params.allow_reduction {
                break if exhausted {
                    StopReason::CandidatesExhausted
                } else {
                    StopReason::BudgetExhausted
                };
            }
            if threshold <= 1 {
                break StopReason::RelaxationExhausted;
            }
            let window_ms = budget.elapsed().as_millis() as u64;
            threshold -= 1;
            stats.relaxations += 1;
            budget.reset();
            debug!(
                threshold,
                accepted = codebook.len(),
                window_ms,
                "relaxed distance threshold"
            );
            if exhausted {
                continue;
            }
        }
        if threshold == 0 {
            break StopReason::RelaxationExhausted;
        }

        stats.turns += 1;
        let candidate = loop {
            let drawn = sampler.sample(width);
            if !seen.contains(&drawn) {
                break drawn;
            }
            stats.duplicate_draws += 1;
        };
        seen.insert(candidate.clone());
        stats.candidates_tested += 1;

        if codebook.admits(&candidate, threshold) {
            codebook.push(candidate);
        } else {
            stats.rejected += 1;
        }
    };

    stats.accepted = codebook.len() as u64;
    stats.elapsed_ms = started.elapsed().as_millis() as u64;
    stats.stop_reason = reason;
    finalize(params, codebook, threshold, stats)
}

fn finalize(
    params: &GenerationParams,
    codebook: Codebook,
    threshold: u32,
    stats: SearchStats,
) -> GenerationResult {
    if codebook.is_empty() {
        let diagnostic = Diagnostic::NoCodewords;
        error!(reason = ?stats.stop_reason, "{}", diagnostic.message());
        let mut result = GenerationResult::empty(params, stats);
        result.diagnostics.push(diagnostic);
        return result;
    }

    let found = codebook.len();
    let mut diagnostics = Vec::new();
    if found < params.size {
        diagnostics.push(Diagnostic::Shortfall {
            found,
            requested: params.size,
            distance: threshold,
        });
    }
    if threshold != params.hamming_distance {
        diagnostics.push(Diagnostic::Relaxed {
            requested: params.hamming_distance,
            achieved: threshold,
            found,
        });
    }
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic.message());
    }

    info!(
        found,
        achieved_distance = threshold,
        turns = stats.turns,
        elapsed_ms = stats.elapsed_ms,
        "codebook search finished"
    );

    GenerationResult {
        representation: params.representation,
        requested_distance: params.hamming_distance,
        requested_size: params.size,
        codewords: codebook.render(params.representation),
        achieved_distance: Some(threshold),
        codebook,
        diagnostics,
        stats,
    }
}

// Number of distinct values of the width, when it fits a usize.
fn candidate_space(width: u32) -> Option<usize> {
    if width < usize::BITS {
        Some(1usize << width)
    } else {
        None
    }
}
