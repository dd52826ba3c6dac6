use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

pub const DEFAULT_INPUT_NEURONS: usize = 20;
pub const DEFAULT_HIDDEN_NEURONS: usize = 4;
pub const DEFAULT_OUTPUT_NEURONS: usize = 4;
pub const DEFAULT_MAX_EPOCHS: usize = 500;
pub const DEFAULT_MIN_ERROR: f64 = 1e-4;
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;
pub const DEFAULT_MOMENTUM: f64 = 0.4;

/// Layer sizes and hyperparameters of a three-layer network.
///
/// A value obtained through `Default` or `Deserialize` is not checked; call
/// [`NetworkConfiguration::validate`] or go through [`NetworkConfiguration::load_json`].
/// An engine is only ever built from a validated configuration, either by
/// [`ConfigurationBuilder`] setters or [`ConfigurationBuilder::from_configuration`].
/// Missing fields in a JSON file take the builder defaults.
///
/// [`ConfigurationBuilder`]: crate::network::builder::ConfigurationBuilder
/// [`ConfigurationBuilder::from_configuration`]: crate::network::builder::ConfigurationBuilder::from_configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfiguration {
    pub(crate) input_neurons: usize,
    pub(crate) hidden_neurons: usize,
    pub(crate) output_neurons: usize,
    pub(crate) max_epochs: usize,
    pub(crate) min_error: f64,
    pub(crate) learning_rate: f64,
    pub(crate) momentum: f64,
}

impl Default for NetworkConfiguration {
    fn default() -> Self {
        NetworkConfiguration {
            input_neurons: DEFAULT_INPUT_NEURONS,
            hidden_neurons: DEFAULT_HIDDEN_NEURONS,
            output_neurons: DEFAULT_OUTPUT_NEURONS,
            max_epochs: DEFAULT_MAX_EPOCHS,
            min_error: DEFAULT_MIN_ERROR,
            learning_rate: DEFAULT_LEARNING_RATE,
            momentum: DEFAULT_MOMENTUM,
        }
    }
}

impl NetworkConfiguration {
    pub fn input_neurons(&self) -> usize {
        self.input_neurons
    }

    pub fn hidden_neurons(&self) -> usize {
        self.hidden_neurons
    }

    pub fn output_neurons(&self) -> usize {
        self.output_neurons
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn min_error(&self) -> f64 {
        self.min_error
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Runs every field through the same checks the builder setters apply.
    pub fn validate(&self) -> Result<()> {
        check_layer_size("input layer size", self.input_neurons)?;
        check_layer_size("hidden layer size", self.hidden_neurons)?;
        check_layer_size("output layer size", self.output_neurons)?;
        check_max_epochs(self.max_epochs)?;
        check_min_error(self.min_error)?;
        check_learning_rate(self.learning_rate)?;
        check_momentum(self.momentum)
    }

    /// Serializes the configuration to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a configuration written by `save_json` (or by hand).
    pub fn load_json(path: &str) -> Result<NetworkConfiguration> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfiguration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn check_layer_size(parameter: &'static str, neurons: usize) -> Result<()> {
    if neurons < 1 {
        return Err(NetworkError::Configuration {
            parameter,
            reason: "layer should have at least one neuron",
        });
    }
    Ok(())
}

pub(crate) fn check_max_epochs(max_epochs: usize) -> Result<()> {
    if max_epochs < 1 {
        return Err(NetworkError::Configuration {
            parameter: "max epochs",
            reason: "network should have at least one epoch to learn",
        });
    }
    Ok(())
}

// Negated comparisons below also reject NaN.

pub(crate) fn check_min_error(min_error: f64) -> Result<()> {
    if !(min_error < 1.0) {
        return Err(NetworkError::Configuration {
            parameter: "min error",
            reason: "must be lower than 1",
        });
    }
    Ok(())
}

pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate < 100.0) {
        return Err(NetworkError::Configuration {
            parameter: "learning rate",
            reason: "must be lower than 100",
        });
    }
    Ok(())
}

pub(crate) fn check_momentum(momentum: f64) -> Result<()> {
    if !(momentum < 1.0) {
        return Err(NetworkError::Configuration {
            parameter: "momentum",
            reason: "must be lower than 1",
        });
    }
    Ok(())
}
