use std::sync::mpsc;

use log::debug;

use crate::error::Result;
use crate::optim::momentum::MomentumSgd;
use crate::train::progress::ProgressReport;

/// Receives one [`ProgressReport`] per completed epoch, synchronously and in
/// order.
///
/// The `control` handle is the only way to change the learning rate and
/// momentum while `learn` is running; a replacement takes effect from the
/// next epoch.
pub trait ProgressSink {
    fn epoch_completed(&mut self, report: &ProgressReport, control: &mut TrainingControl);
}

/// Hyperparameter handle passed to a [`ProgressSink`] after each epoch.
#[derive(Debug)]
pub struct TrainingControl {
    current: MomentumSgd,
    requested: Option<MomentumSgd>,
}

impl TrainingControl {
    pub(crate) fn new(current: MomentumSgd) -> TrainingControl {
        TrainingControl { current, requested: None }
    }

    /// Learning rate the next epoch will use.
    pub fn learning_rate(&self) -> f64 {
        self.requested.unwrap_or(self.current).learning_rate()
    }

    /// Momentum the next epoch will use.
    pub fn momentum(&self) -> f64 {
        self.requested.unwrap_or(self.current).momentum()
    }

    /// Replaces learning rate and momentum for the following epochs.
    ///
    /// Values are checked with the builder rules; on error the previous
    /// values stay in force.
    pub fn update_hyperparameters(&mut self, learning_rate: f64, momentum: f64) -> Result<()> {
        self.requested = Some(MomentumSgd::new(learning_rate, momentum)?);
        Ok(())
    }

    pub(crate) fn into_requested(self) -> Option<MomentumSgd> {
        self.requested
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn epoch_completed(&mut self, _report: &ProgressReport, _control: &mut TrainingControl) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressReport, &mut TrainingControl),
{
    fn epoch_completed(&mut self, report: &ProgressReport, control: &mut TrainingControl) {
        self(report, control)
    }
}

/// Forwards every report over a channel. A dropped receiver does not stop
/// training; the report is simply lost.
impl ProgressSink for mpsc::Sender<ProgressReport> {
    fn epoch_completed(&mut self, report: &ProgressReport, _control: &mut TrainingControl) {
        if self.send(report.clone()).is_err() {
            debug!("progress receiver dropped at epoch {}", report.epoch);
        }
    }
}

/// Records every report in epoch order.
impl ProgressSink for Vec<ProgressReport> {
    fn epoch_completed(&mut self, report: &ProgressReport, _control: &mut TrainingControl) {
        self.push(report.clone());
    }
}
