use rand::Rng;

use crate::activation::sigmoid::Sigmoid;
use crate::layers::layer::Layer;
use crate::loss::sse::SumSquaredError;
use crate::network::config::NetworkConfiguration;
use crate::optim::momentum::MomentumSgd;

/// Input, hidden and output layers wired input → hidden → output.
#[derive(Debug, Clone)]
pub struct NetworkTopology {
    pub(crate) input: Layer,
    pub(crate) hidden: Layer,
    pub(crate) output: Layer,
}

impl NetworkTopology {
    /// Builds the three layers from `config`, sampling the hidden layer's
    /// weights before the output layer's.
    pub fn new<R: Rng>(config: &NetworkConfiguration, rng: &mut R) -> NetworkTopology {
        let input = Layer::new(config.input_neurons());
        let hidden = Layer::connected_to(config.hidden_neurons(), &input, rng);
        let output = Layer::connected_to(config.output_neurons(), &hidden, rng);
        NetworkTopology { input, hidden, output }
    }

    pub fn input_layer(&self) -> &Layer {
        &self.input
    }

    pub fn hidden_layer(&self) -> &Layer {
        &self.hidden
    }

    pub fn output_layer(&self) -> &Layer {
        &self.output
    }

    /// Loads `input` into the input layer and propagates it to the output
    /// layer. The caller checks that `input` matches the input layer size.
    pub(crate) fn forward(&mut self, input: &[f64]) {
        self.input.load(input);
        self.hidden.sum_weights(&self.input);
        self.hidden.activate();
        self.output.sum_weights(&self.hidden);
        self.output.activate();
    }

    /// Sets output signal errors from `expected`, then back-propagates them
    /// to the hidden layer using the not-yet-updated output weights.
    pub(crate) fn compute_signal_errors(&mut self, expected: &[f64]) {
        let signals = SumSquaredError::output_signals(&self.output.outputs(), expected);
        for (neuron, signal) in self.output.neurons_mut().iter_mut().zip(signals) {
            neuron.set_signal_error(signal);
        }

        let output = &self.output;
        for (h, neuron) in self.hidden.neurons_mut().iter_mut().enumerate() {
            let downstream: f64 = output.neurons().iter()
                .map(|k| k.weight(h) * k.signal_error())
                .sum();
            let derivative = Sigmoid::derivative_from_output(neuron.output());
            neuron.set_signal_error(derivative * downstream);
        }
    }

    /// Output layer first (against hidden outputs), then hidden layer
    /// (against input outputs).
    pub(crate) fn apply_updates(&mut self, optimizer: &MomentumSgd) {
        optimizer.step(&mut self.output, &self.hidden);
        optimizer.step(&mut self.hidden, &self.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(input: usize, hidden: usize, output: usize) -> NetworkConfiguration {
        NetworkConfiguration {
            input_neurons: input,
            hidden_neurons: hidden,
            output_neurons: output,
            ..NetworkConfiguration::default()
        }
    }

    #[test]
    fn every_non_input_neuron_has_one_weight_per_upstream_neuron() {
        let mut rng = StdRng::seed_from_u64(11);
        let topology = NetworkTopology::new(&config(6, 4, 3), &mut rng);

        assert_eq!(topology.input_layer().len(), 6);
        assert!(topology.input_layer().neurons().iter().all(|n| n.is_input()));
        assert!(topology.hidden_layer().neurons().iter().all(|n| n.weights().len() == 6));
        assert!(topology.output_layer().neurons().iter().all(|n| n.weights().len() == 4));
    }

    #[test]
    fn forward_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut topology = NetworkTopology::new(&config(3, 2, 2), &mut rng);

        topology.forward(&[0.1, 0.9, -0.4]);
        let first = topology.output_layer().outputs();
        topology.forward(&[0.1, 0.9, -0.4]);
        let second = topology.output_layer().outputs();

        assert_eq!(first.len(), 2);
        assert_eq!(
            first.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            second.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }
}
