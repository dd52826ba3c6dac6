use std::time::Instant;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, VectorKind};
use crate::loss::sse::SumSquaredError;
use crate::network::config::NetworkConfiguration;
use crate::network::topology::NetworkTopology;
use crate::optim::momentum::MomentumSgd;
use crate::train::progress::ProgressReport;
use crate::train::sink::{NoProgress, ProgressSink, TrainingControl};
use crate::train::training_set::{check_len, TrainingSet};

/// Lifecycle of a [`TrainingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    /// Built, `learn` never called.
    Idle,
    /// Inside `learn`.
    Training,
    /// At least one `learn` call has completed.
    Trained,
}

/// Owns a three-layer network, its training set and the random generator
/// used for both weight initialization and per-epoch shuffling.
///
/// Training is online: weights are updated right after every sample, with
/// samples visited in a fresh random order each epoch.
pub struct TrainingEngine<R: Rng = StdRng> {
    config: NetworkConfiguration,
    topology: NetworkTopology,
    training_set: TrainingSet,
    // Most recent output-layer activations per sample, refreshed each epoch.
    actual_outputs: Vec<Vec<f64>>,
    optimizer: MomentumSgd,
    rng: R,
    state: TrainingState,
}

impl<R: Rng> TrainingEngine<R> {
    /// `config` must already be validated; see [`ConfigurationBuilder`].
    ///
    /// [`ConfigurationBuilder`]: crate::network::builder::ConfigurationBuilder
    pub(crate) fn new(config: NetworkConfiguration, topology: NetworkTopology, rng: R) -> Self {
        let training_set = TrainingSet::new(config.input_neurons, config.output_neurons);
        let optimizer = MomentumSgd::unchecked(config.learning_rate, config.momentum);
        TrainingEngine {
            config,
            topology,
            training_set,
            actual_outputs: Vec::new(),
            optimizer,
            rng,
            state: TrainingState::Idle,
        }
    }

    pub fn configuration(&self) -> &NetworkConfiguration {
        &self.config
    }

    pub fn topology(&self) -> &NetworkTopology {
        &self.topology
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.training_set
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    pub fn input_layer_size(&self) -> usize {
        self.topology.input.len()
    }

    pub fn output_layer_size(&self) -> usize {
        self.topology.output.len()
    }

    pub fn sample_count(&self) -> usize {
        self.training_set.len()
    }

    /// Learning rate used by the next epoch.
    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    /// Momentum used by the next epoch.
    pub fn momentum(&self) -> f64 {
        self.optimizer.momentum()
    }

    /// Replaces learning rate and momentum for subsequent epochs. During
    /// `learn` use [`TrainingControl::update_hyperparameters`] instead.
    pub fn update_hyperparameters(&mut self, learning_rate: f64, momentum: f64) -> Result<()> {
        self.optimizer = MomentumSgd::new(learning_rate, momentum)?;
        trace!("hyperparameters replaced: learning rate {learning_rate}, momentum {momentum}");
        Ok(())
    }

    /// Registers one training sample.
    ///
    /// Fails with `DimensionMismatch` when `input` does not match the input
    /// layer or `expected` does not match the output layer; nothing is
    /// stored in that case.
    pub fn add_learning_pair(&mut self, input: Vec<f64>, expected: Vec<f64>) -> Result<()> {
        self.training_set.push(input, expected)
    }

    /// Trains without reporting progress. See [`TrainingEngine::learn_with`].
    pub fn learn(&mut self) -> ProgressReport {
        self.learn_with(&mut NoProgress)
    }

    /// Runs epochs until `max_epochs` have completed or the overall error
    /// drops to `min_error`, reporting each epoch to `sink`. Returns the last
    /// epoch's report.
    ///
    /// Calling it again continues from the current weights and momentum
    /// terms; epoch numbering restarts at 0.
    pub fn learn_with<S: ProgressSink + ?Sized>(&mut self, sink: &mut S) -> ProgressReport {
        let max_epochs = self.config.max_epochs;
        let min_error = self.config.min_error;

        self.state = TrainingState::Training;
        info!(
            "training on {} samples for up to {} epochs (min error {})",
            self.training_set.len(),
            max_epochs,
            min_error
        );

        let mut epoch = 0;
        loop {
            let t_start = Instant::now();
            let overall_error = self.run_one_epoch();
            let elapsed_ms = t_start.elapsed().as_millis() as u64;

            let report = ProgressReport::new(epoch, max_epochs, overall_error, min_error, elapsed_ms);
            debug!("epoch {}: overall error = {:.6}", epoch, overall_error);

            let mut control = TrainingControl::new(self.optimizer);
            sink.epoch_completed(&report, &mut control);
            if let Some(next) = control.into_requested() {
                trace!(
                    "hyperparameters replaced after epoch {}: learning rate {}, momentum {}",
                    epoch,
                    next.learning_rate(),
                    next.momentum()
                );
                self.optimizer = next;
            }

            epoch += 1;
            if overall_error <= min_error {
                info!("reached overall error {:.6} after {} epochs", overall_error, epoch);
                self.state = TrainingState::Trained;
                return report;
            }
            if epoch >= max_epochs {
                warn!(
                    "stopped at {} epochs with overall error {:.6} above {}",
                    epoch, overall_error, min_error
                );
                self.state = TrainingState::Trained;
                return report;
            }
        }
    }

    /// Feeds `input` forward and returns the output layer's activations.
    /// Weights are not touched.
    pub fn result_for_inputs(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        check_len(VectorKind::Input, self.topology.input.len(), input.len())?;
        self.topology.forward(input);
        Ok(self.topology.output.outputs())
    }

    /// One pass over every sample in a freshly shuffled order. Returns the
    /// overall error of the outputs recorded during the pass.
    fn run_one_epoch(&mut self) -> f64 {
        let n = self.training_set.len();
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);
        self.actual_outputs.resize(n, Vec::new());

        for &idx in &indices {
            let Some((input, expected)) = self.training_set.get(idx) else {
                continue;
            };

            self.topology.forward(input);
            self.topology.compute_signal_errors(expected);
            self.topology.apply_updates(&self.optimizer);

            self.actual_outputs[idx] = self.topology.output.outputs();
        }

        self.overall_error()
    }

    fn overall_error(&self) -> f64 {
        self.actual_outputs.iter()
            .zip(self.training_set.expected_outputs())
            .map(|(actual, expected)| SumSquaredError::loss(actual, expected))
            .sum()
    }
}
