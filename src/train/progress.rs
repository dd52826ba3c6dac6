use serde::{Deserialize, Serialize};

/// Snapshot of training state emitted once per completed epoch.
///
/// The engine hands one `ProgressReport` to its [`ProgressSink`] after the
/// epoch's weight updates are applied and before the next epoch starts.
///
/// [`ProgressSink`]: crate::train::sink::ProgressSink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// 0-based epoch index within the current `learn` call.
    pub epoch: usize,
    /// `(epoch + 1) / max_epochs`.
    pub learn_progress: f64,
    /// `Σ 0.5 * (expected - actual)²` over every sample and output neuron.
    pub overall_error: f64,
    /// `min_error / overall_error * 100`. Grows as training improves, so it
    /// reads as headroom rather than a percentage. `None` once the overall
    /// error is exactly zero.
    pub percent_of_error: Option<f64>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl ProgressReport {
    pub(crate) fn new(
        epoch: usize,
        max_epochs: usize,
        overall_error: f64,
        min_error: f64,
        elapsed_ms: u64,
    ) -> ProgressReport {
        let percent_of_error = if overall_error == 0.0 {
            None
        } else {
            Some(min_error / overall_error * 100.0)
        };

        ProgressReport {
            epoch,
            learn_progress: (epoch as f64 + 1.0) / max_epochs as f64,
            overall_error,
            percent_of_error,
            elapsed_ms,
        }
    }
}
