use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::network::config::{
    check_layer_size, check_learning_rate, check_max_epochs, check_min_error, check_momentum,
    NetworkConfiguration,
};
use crate::network::topology::NetworkTopology;
use crate::train::engine::TrainingEngine;

/// Fluent, validating builder for a [`TrainingEngine`].
///
/// Every setter checks its argument and returns the builder unchanged on
/// success, so calls chain with `?`:
///
/// ```
/// use backprop_nn::ConfigurationBuilder;
///
/// # fn main() -> backprop_nn::Result<()> {
/// let engine = ConfigurationBuilder::new()
///     .input_neurons(2)?
///     .hidden_neurons(2)?
///     .output_neurons(1)?
///     .learning_rate(0.5)?
///     .build_seeded(7);
/// assert_eq!(engine.input_layer_size(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: NetworkConfiguration,
}

impl ConfigurationBuilder {
    /// Starts from the defaults: 20-4-4 neurons, 500 epochs, min error 1e-4,
    /// learning rate 0.2, momentum 0.4.
    pub fn new() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn input_neurons(mut self, neurons: usize) -> Result<Self> {
        check_layer_size("input layer size", neurons)?;
        self.config.input_neurons = neurons;
        Ok(self)
    }

    pub fn hidden_neurons(mut self, neurons: usize) -> Result<Self> {
        check_layer_size("hidden layer size", neurons)?;
        self.config.hidden_neurons = neurons;
        Ok(self)
    }

    pub fn output_neurons(mut self, neurons: usize) -> Result<Self> {
        check_layer_size("output layer size", neurons)?;
        self.config.output_neurons = neurons;
        Ok(self)
    }

    pub fn max_epochs(mut self, max_epochs: usize) -> Result<Self> {
        check_max_epochs(max_epochs)?;
        self.config.max_epochs = max_epochs;
        Ok(self)
    }

    /// Overall error at or below which training stops. Must be lower than 1.
    pub fn min_error(mut self, min_error: f64) -> Result<Self> {
        check_min_error(min_error)?;
        self.config.min_error = min_error;
        Ok(self)
    }

    /// Must be lower than 100.
    pub fn learning_rate(mut self, learning_rate: f64) -> Result<Self> {
        check_learning_rate(learning_rate)?;
        self.config.learning_rate = learning_rate;
        Ok(self)
    }

    /// Must be lower than 1.
    pub fn momentum(mut self, momentum: f64) -> Result<Self> {
        check_momentum(momentum)?;
        self.config.momentum = momentum;
        Ok(self)
    }

    /// Starts from an already validated configuration, e.g. one read with
    /// [`NetworkConfiguration::load_json`].
    pub fn from_configuration(config: NetworkConfiguration) -> Result<Self> {
        config.validate()?;
        Ok(ConfigurationBuilder { config })
    }

    pub fn configuration(&self) -> &NetworkConfiguration {
        &self.config
    }

    /// Builds an engine whose generator is seeded from OS entropy.
    pub fn build(self) -> TrainingEngine<StdRng> {
        self.build_with_rng(StdRng::from_entropy())
    }

    /// Builds an engine with a reproducible generator.
    pub fn build_seeded(self, seed: u64) -> TrainingEngine<StdRng> {
        self.build_with_rng(StdRng::seed_from_u64(seed))
    }

    /// Builds an engine around `rng`, which samples the initial weights and
    /// later shuffles every epoch.
    pub fn build_with_rng<R: Rng>(self, mut rng: R) -> TrainingEngine<R> {
        let config = self.config;
        debug!(
            "building {}-{}-{} network",
            config.input_neurons, config.hidden_neurons, config.output_neurons
        );
        let topology = NetworkTopology::new(&config, &mut rng);
        TrainingEngine::new(config, topology, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn failed_setter_reports_the_parameter() {
        let err = ConfigurationBuilder::new().hidden_neurons(0).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Configuration { parameter: "hidden layer size", .. }
        ));
    }

    #[test]
    fn setters_store_values() {
        let builder = ConfigurationBuilder::new()
            .input_neurons(3).unwrap()
            .hidden_neurons(5).unwrap()
            .output_neurons(2).unwrap()
            .max_epochs(42).unwrap()
            .min_error(0.5).unwrap()
            .learning_rate(99.0).unwrap()
            .momentum(-0.5).unwrap();

        let config = builder.configuration();
        assert_eq!(config.input_neurons(), 3);
        assert_eq!(config.hidden_neurons(), 5);
        assert_eq!(config.output_neurons(), 2);
        assert_eq!(config.max_epochs(), 42);
        assert_eq!(config.min_error(), 0.5);
        assert_eq!(config.learning_rate(), 99.0);
        assert_eq!(config.momentum(), -0.5);
    }

    #[test]
    fn build_wires_layers_from_configuration() {
        let engine = ConfigurationBuilder::new()
            .input_neurons(3).unwrap()
            .hidden_neurons(2).unwrap()
            .output_neurons(4).unwrap()
            .build_seeded(1);

        let topology = engine.topology();
        assert_eq!(topology.input_layer().len(), 3);
        assert_eq!(topology.hidden_layer().len(), 2);
        assert_eq!(topology.output_layer().len(), 4);
        assert!(topology.output_layer().neurons().iter().all(|n| n.weights().len() == 2));
    }

    #[test]
    fn from_configuration_validates() {
        let config = NetworkConfiguration {
            output_neurons: 0,
            ..NetworkConfiguration::default()
        };
        assert!(ConfigurationBuilder::from_configuration(config).is_err());
    }
}
