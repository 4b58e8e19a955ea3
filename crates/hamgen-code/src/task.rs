use std::thread::{self, JoinHandle};

use hamgen_core::{ErrorInfo, HamgenError, RngHandle};

use crate::config::GenerationParams;
use crate::search::{generate_codebook_until, GenerationResult, StopSignal};

/// Generation running on a worker thread.
#[derive(Debug)]
pub struct GenerationHandle {
    signal: StopSignal,
    worker: JoinHandle<GenerationResult>,
}

/// Starts a generation on a dedicated thread.
///
/// The worker seeds its RNG from `params.seed`, or from entropy when unset.
pub fn spawn_generation(params: GenerationParams) -> Result<GenerationHandle, HamgenError> {
    let signal = StopSignal::new();
    let worker_signal = signal.clone();
    let worker = thread::Builder::new()
        .name("hamgen-search".to_string())
        .spawn(move || {
            let mut rng = RngHandle::from_optional_seed(params.seed);
            generate_codebook_until(&params, &mut rng, &worker_signal)
        })
        .map_err(|err| HamgenError::Rng(ErrorInfo::new("worker-spawn", err.to_string())))?;
    Ok(GenerationHandle { signal, worker })
}

impl GenerationHandle {
    /// Asks the search to wrap up at its next turn.
    pub fn stop(&self) {
        self.signal.stop();
    }

    /// True once the worker has returned.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the result.
    pub fn join(self) -> Result<GenerationResult, HamgenError> {
        self.worker.join().map_err(|_| {
            HamgenError::Rng(ErrorInfo::new("worker-panicked", "search thread panicked"))
        })
    }
}
