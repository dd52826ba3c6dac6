use crate::error::Result;
use crate::layers::layer::Layer;
use crate::network::config::{check_learning_rate, check_momentum};

/// Online gradient step with momentum.
///
/// For every weight: `delta = learning_rate * signal_error * upstream_output
/// + momentum * previous_delta`, then `weight += delta`. The bias follows the
/// same rule with an upstream output of 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSgd {
    learning_rate: f64,
    momentum: f64,
}

impl MomentumSgd {
    /// Validates both values with the builder rules.
    pub fn new(learning_rate: f64, momentum: f64) -> Result<MomentumSgd> {
        check_learning_rate(learning_rate)?;
        check_momentum(momentum)?;
        Ok(MomentumSgd { learning_rate, momentum })
    }

    /// For values that already passed validation, e.g. a built configuration.
    pub(crate) fn unchecked(learning_rate: f64, momentum: f64) -> MomentumSgd {
        MomentumSgd { learning_rate, momentum }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Size of the next step given the current signal error, the upstream
    /// output and the previous step.
    pub fn delta(&self, signal_error: f64, upstream_output: f64, previous_delta: f64) -> f64 {
        self.learning_rate * signal_error * upstream_output + self.momentum * previous_delta
    }

    /// Applies one update to every neuron of `layer` using the outputs of
    /// `upstream`. Signal errors must already be set.
    pub fn step(&self, layer: &mut Layer, upstream: &Layer) {
        for neuron in layer.neurons_mut() {
            let signal = neuron.signal_error();

            if let Some(bias) = neuron.bias_weight() {
                let delta = self.delta(signal, 1.0, neuron.bias_delta());
                neuron.set_bias_delta(delta);
                neuron.set_bias_weight(bias + delta);
            }

            for (j, source) in upstream.neurons().iter().enumerate() {
                let delta = self.delta(signal, source.output(), neuron.weight_delta(j));
                neuron.set_weight_delta(j, delta);
                neuron.set_weight(j, neuron.weight(j) + delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            MomentumSgd::new(100.0, 0.1),
            Err(NetworkError::Configuration { parameter: "learning rate", .. })
        ));
        assert!(matches!(
            MomentumSgd::new(0.1, 1.0),
            Err(NetworkError::Configuration { parameter: "momentum", .. })
        ));
    }

    #[test]
    fn step_applies_momentum_to_previous_delta() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut upstream = Layer::new(1);
        upstream.load(&[0.5]);
        let mut layer = Layer::connected_to(1, &upstream, &mut rng);
        {
            let neuron = &mut layer.neurons_mut()[0];
            neuron.set_weight(0, 0.0);
            neuron.set_bias_weight(0.0);
            neuron.set_signal_error(0.25);
        }

        let optimizer = MomentumSgd::new(0.5, 0.5).unwrap();
        optimizer.step(&mut layer, &upstream);

        let neuron = &layer.neurons()[0];
        // 0.5 * 0.25 * 0.5
        assert_eq!(neuron.weight_delta(0), 0.0625);
        assert_eq!(neuron.weight(0), 0.0625);
        // 0.5 * 0.25 * 1
        assert_eq!(neuron.bias_delta(), 0.125);
        assert_eq!(neuron.bias_weight(), Some(0.125));

        optimizer.step(&mut layer, &upstream);
        let neuron = &layer.neurons()[0];
        // 0.0625 + 0.5 * 0.0625
        assert_eq!(neuron.weight_delta(0), 0.09375);
        assert_eq!(neuron.weight(0), 0.15625);
        assert_eq!(neuron.bias_delta(), 0.1875);
        assert_eq!(neuron.bias_weight(), Some(0.3125));
    }
}
