use std::collections::HashSet;

use hamgen_code::{
    generate_codebook, Diagnostic, GenerationParams, Outcome, Representation, StopReason,
};
use hamgen_core::RngHandle;
use proptest::prelude::*;

fn iteration_params(bit_width: u32, size: usize, distance: u32, turns: u64) -> GenerationParams {
    GenerationParams {
        iteration_budget: turns,
        timeout_ms: 0,
        ..GenerationParams::new(bit_width, size, distance)
    }
}

#[test]
fn distance_equal_to_width_is_rejected_up_front() {
    let params = iteration_params(4, 3, 4, 1000);
    let result = generate_codebook(&params, &mut RngHandle::from_seed(1));
    assert!(result.is_empty());
    assert_eq!(result.achieved_distance, None);
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.stats.stop_reason, StopReason::Infeasible);
    assert_eq!(result.stats.turns, 0);
}

#[test]
fn trivially_feasible_request_succeeds() {
    let params = iteration_params(8, 2, 1, 10_000);
    let result = generate_codebook(&params, &mut RngHandle::from_seed(2));
    assert_eq!(result.codewords.len(), 2);
    assert!(result.achieved_distance.unwrap() >= 1);
    assert_eq!(result.outcome(), Outcome::Complete);
    assert_eq!(result.stats.stop_reason, StopReason::TargetReached);
}

#[test]
fn feasible_request_succeeds_under_time_budget() {
    let params = GenerationParams {
        timeout_ms: 2_000,
        ..GenerationParams::new(8, 2, 1)
    };
    let result = generate_codebook(&params, &mut RngHandle::from_seed(3));
    assert_eq!(result.codewords.len(), 2);
    assert_eq!(result.achieved_distance, Some(1));
}

#[test]
fn small_space_without_relaxation_stops_when_every_value_was_tried() {
    let params = iteration_params(4, 10, 3, 500);
    let result = generate_codebook(&params, &mut RngHandle::from_seed(4));
    assert!(!result.is_empty());
    assert!(result.codewords.len() < 10);
    assert_eq!(result.achieved_distance, Some(3));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::Shortfall { requested: 10, .. })));
    assert_eq!(result.stats.stop_reason, StopReason::CandidatesExhausted);
    assert_eq!(result.stats.turns, 16);
}

#[test]
fn wide_space_without_relaxation_stops_when_turns_run_out() {
    let params = iteration_params(16, 200, 8, 300);
    let result = generate_codebook(&params, &mut RngHandle::from_seed(14));
    assert!(!result.is_empty());
    assert!(result.codewords.len() < 200);
    assert_eq!(result.achieved_distance, Some(8));
    assert_eq!(result.stats.stop_reason, StopReason::BudgetExhausted);
    assert_eq!(result.stats.relaxations, 0);
    assert!(result.stats.turns < 300);
    assert!(result.codebook.verify(8));
}

#[test]
fn unsatisfiable_request_with_time_budget_terminates() {
    let params = GenerationParams {
        timeout_ms: 50,
        ..GenerationParams::new(4, 10, 3)
    };
    let result = generate_codebook(&params, &mut RngHandle::from_seed(5));
    assert!(result.codewords.len() < 10);
    assert!(result.stats.elapsed_ms < 5_000);
}

#[test]
fn relaxation_in_exhausted_small_space_lowers_the_reported_distance() {
    let params = GenerationParams {
        allow_reduction: true,
        ..iteration_params(4, 10, 3, 200)
    };
    let result = generate_codebook(&params, &mut RngHandle::from_seed(6));
    let achieved = result.achieved_distance.unwrap();
    assert!(achieved < 3);
    assert!(achieved >= 1);
    assert!(achieved < params.bit_width);
    assert!(result.stats.relaxations >= 1);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::Relaxed { requested: 3, .. })));
    assert!(result.codebook.verify(achieved));
}

#[test]
fn iteration_budget_relaxation_keeps_sampling_at_lower_thresholds() {
    let params = GenerationParams {
        allow_reduction: true,
        ..iteration_params(16, 200, 8, 300)
    };
    let result = generate_codebook(&params, &mut RngHandle::from_seed(15));
    let achieved = result.achieved_distance.unwrap();
    assert!(result.stats.relaxations >= 1);
    assert!(achieved < 8 && achieved >= 1);
    assert!(result.stats.turns >= 300, "sampling continued past the first window");
    assert_ne!(result.stats.stop_reason, StopReason::CandidatesExhausted);
    assert!(result.codebook.verify(achieved));
    // Words accepted after a relaxation sit closer than the requested distance.
    assert!(result.codebook.min_pairwise_distance().unwrap() < 8);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::Relaxed { requested: 8, .. })));
}

#[test]
fn time_budget_relaxation_restarts_the_clock_per_threshold() {
    let params = GenerationParams {
        allow_reduction: true,
        timeout_ms: 20,
        ..GenerationParams::new(16, 200, 8)
    };
    let result = generate_codebook(&params, &mut RngHandle::from_seed(16));
    let achieved = result.achieved_distance.unwrap();
    assert!(result.stats.relaxations >= 1);
    assert!(achieved < 8 && achieved >= 1);
    assert_ne!(result.stats.stop_reason, StopReason::CandidatesExhausted);
    assert!(result.codebook.verify(achieved));
    assert!(result.codebook.min_pairwise_distance().unwrap() < 8);
    // One window per relaxation plus the final one.
    let windows = u64::from(result.stats.relaxations) + 1;
    assert!(result.stats.elapsed_ms + 1 >= 20 * u64::from(result.stats.relaxations));
    assert!(result.stats.elapsed_ms < 20 * windows + 5_000);
}

#[test]
fn auto_generate_keeps_going_past_size() {
    let params = GenerationParams {
        auto_generate: true,
        ..iteration_params(16, 1, 2, 2_000)
    };
    let result = generate_codebook(&params, &mut RngHandle::from_seed(7));
    assert!(result.codewords.len() > 1);
    assert_eq!(result.stats.stop_reason, StopReason::BudgetExhausted);
    assert!(result.codebook.verify(2));
}

#[test]
fn seeded_runs_are_reproducible() {
    let params = GenerationParams {
        representation: Representation::Binary,
        ..iteration_params(32, 8, 10, 5_000)
    };
    let first = generate_codebook(&params, &mut RngHandle::from_seed(99));
    let second = generate_codebook(&params, &mut RngHandle::from_seed(99));
    assert_eq!(first.codewords, second.codewords);
    assert_eq!(first.codebook, second.codebook);
}

#[test]
fn wide_codewords_are_generated_without_truncation() {
    let params = iteration_params(128, 6, 40, 5_000);
    let result = generate_codebook(&params, &mut RngHandle::from_seed(8));
    assert_eq!(result.codewords.len(), 6);
    for text in &result.codewords {
        assert_eq!(text.len(), 2 + 32);
    }
    assert!(result.codebook.min_pairwise_distance().unwrap() >= 40);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn accepted_codebooks_respect_reported_distance(
        seed in any::<u64>(),
        width in 3u32..14,
        size in 2usize..12,
        distance_fraction in 0.1f64..0.9,
        allow_reduction in any::<bool>(),
    ) {
        let distance = ((f64::from(width) * distance_fraction) as u32).clamp(1, width - 1);
        let params = GenerationParams {
            allow_reduction,
            representation: Representation::Binary,
            ..iteration_params(width, size, distance, 300)
        };
        let result = generate_codebook(&params, &mut RngHandle::from_seed(seed));
        if let Some(achieved) = result.achieved_distance {
            prop_assert!(achieved >= 1 && achieved < width);
            prop_assert!(result.codebook.verify(achieved));
            let unique: HashSet<_> = result.codewords.iter().collect();
            prop_assert_eq!(unique.len(), result.codewords.len());
            for text in &result.codewords {
                prop_assert_eq!(text.len(), width as usize);
            }
        }
    }
}
