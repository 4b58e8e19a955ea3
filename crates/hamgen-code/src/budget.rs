use std::time::{Duration, Instant};

use crate::config::BudgetMode;

/// Tracks the budget window of the current threshold.
///
/// Iteration budgets count turns down to zero; time budgets measure the wall clock
/// since the search started or since the last relaxation.
#[derive(Debug)]
pub struct BudgetGuard {
    mode: BudgetMode,
    remaining: u64,
    window_start: Instant,
}

impl BudgetGuard {
    /// Starts a fresh window.
    pub fn new(mode: BudgetMode) -> Self {
        let remaining = match mode {
            BudgetMode::Iterations { turns } => turns,
            BudgetMode::Timeout { .. } => 0,
        };
        Self {
            mode,
            remaining,
            window_start: Instant::now(),
        }
    }

    /// Consumes one turn and reports whether the window has expired.
    pub fn tick(&mut self) -> bool {
        match self.mode {
            BudgetMode::Iterations { .. } => {
                self.remaining = self.remaining.saturating_sub(1);
                self.remaining == 0
            }
            BudgetMode::Timeout { millis } => {
                self.window_start.elapsed() >= Duration::from_millis(millis)
            }
        }
    }

    /// Opens a new window after a relaxation.
    pub fn reset(&mut self) {
        if let BudgetMode::Iterations { turns } = self.mode {
            self.remaining = turns;
        }
        self.window_start = Instant::now();
    }

    /// Time spent in the current window.
    pub fn elapsed(&self) -> Duration {
        self.window_start.elapsed()
    }
}
