use std::sync::mpsc;
use std::thread;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::event;

use crate::core::{Card, EquityError, Hand};

use super::EquityCalculator;

impl EquityCalculator {
    /// Monte carlo equity split across `workers` threads.
    ///
    /// `trials` is rounded up to a multiple of `workers` so every worker
    /// plays the same number of deals, which means up to `workers - 1`
    /// extra deals get played. The result is the plain mean of the worker
    /// means. With `trials == 0` a single exhaustive pass runs instead.
    pub fn simulate_parallel(
        &self,
        hole: &Hand,
        board: &[Card],
        trials: usize,
        workers: usize,
    ) -> Result<f64, EquityError> {
        self.simulate_parallel_with_rng(hole, board, trials, workers, &mut rand::rng())
    }

    /// Same as [`EquityCalculator::simulate_parallel`]. Each worker gets
    /// its own `SmallRng` seeded from `rng`.
    pub fn simulate_parallel_with_rng<R: Rng>(
        &self,
        hole: &Hand,
        board: &[Card],
        trials: usize,
        workers: usize,
        rng: &mut R,
    ) -> Result<f64, EquityError> {
        if workers == 0 {
            return Err(EquityError::InvalidWorkerCount);
        }
        if trials == 0 {
            return self.simulate_with_rng(hole, board, 0, rng);
        }

        let setup = Self::setup(hole, board)?;
        let (per_worker, realized) = split_trials(trials, workers);
        event!(
            tracing::Level::DEBUG,
            hole = %hole,
            workers,
            per_worker,
            requested = trials,
            realized,
            "Starting parallel equity"
        );

        // Zero capacity: each worker hands its mean straight to the collector.
        let (tx, rx) = mpsc::sync_channel::<f64>(0);
        let total: f64 = thread::scope(|scope| {
            for worker in 0..workers {
                let tx = tx.clone();
                let setup = setup.clone();
                let mut rng = SmallRng::from_rng(rng);
                scope.spawn(move || {
                    let mean = self.monte_carlo(hole, setup, per_worker, &mut rng);
                    event!(tracing::Level::TRACE, worker, mean, "Equity worker done");
                    // The collector below outlives every worker.
                    let _ = tx.send(mean);
                });
            }
            drop(tx);
            rx.iter().sum()
        });

        Ok(total / workers as f64)
    }
}

/// Trials per worker, rounded up, and how many deals that plays in total.
/// The total saturates rather than wrapping for absurd trial counts.
fn split_trials(trials: usize, workers: usize) -> (usize, usize) {
    let per_worker = trials.div_ceil(workers);
    (per_worker, per_worker.saturating_mul(workers))
}
