use rand::Rng;

use crate::activation::sigmoid::Sigmoid;

/// A single computation node.
///
/// Input-layer neurons only carry an output value. Hidden and output neurons
/// also own one weight (and one previous weight step) per neuron of the
/// layer directly before them, addressed by that neuron's index, plus a bias.
#[derive(Debug, Clone)]
pub struct Neuron {
    index: usize,
    output: f64,
    bias_weight: Option<f64>,
    bias_delta: f64,
    signal_error: f64,
    weights: Vec<f64>,
    weight_deltas: Vec<f64>,
}

impl Neuron {
    /// Builds an input-layer neuron: no weights, no bias.
    pub fn input(index: usize) -> Neuron {
        Neuron {
            index,
            output: 0.0,
            bias_weight: None,
            bias_delta: 0.0,
            signal_error: 0.0,
            weights: Vec::new(),
            weight_deltas: Vec::new(),
        }
    }

    /// Builds a neuron connected to `upstream_len` neurons. Every weight and
    /// the bias are drawn independently from U[-1, 1]; all deltas start at 0.
    pub fn connected<R: Rng>(index: usize, upstream_len: usize, rng: &mut R) -> Neuron {
        let weights = (0..upstream_len).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let bias_weight = rng.gen_range(-1.0..=1.0);

        Neuron {
            index,
            output: 0.0,
            bias_weight: Some(bias_weight),
            bias_delta: 0.0,
            signal_error: 0.0,
            weights,
            weight_deltas: vec![0.0; upstream_len],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_input(&self) -> bool {
        self.bias_weight.is_none()
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn set_output(&mut self, output: f64) {
        self.output = output;
    }

    /// Replaces the output with `Σ weight[j] * upstream[j].output + bias`.
    ///
    /// Input neurons are left untouched.
    pub fn sum_weighted_input(&mut self, upstream: &[Neuron]) {
        let Some(bias) = self.bias_weight else {
            return;
        };
        debug_assert_eq!(self.weights.len(), upstream.len());

        let sum: f64 = self.weights.iter()
            .zip(upstream)
            .map(|(w, n)| w * n.output)
            .sum();
        self.output = sum + bias;
    }

    /// Squashes the current output through the logistic sigmoid.
    pub fn activate(&mut self) {
        self.output = Sigmoid::function(self.output);
    }

    pub fn signal_error(&self) -> f64 {
        self.signal_error
    }

    pub fn set_signal_error(&mut self, signal_error: f64) {
        self.signal_error = signal_error;
    }

    /// `None` for input-layer neurons.
    pub fn bias_weight(&self) -> Option<f64> {
        self.bias_weight
    }

    /// No-op on input-layer neurons, which never carry a bias.
    pub fn set_bias_weight(&mut self, bias_weight: f64) {
        if let Some(bias) = self.bias_weight.as_mut() {
            *bias = bias_weight;
        }
    }

    pub fn bias_delta(&self) -> f64 {
        self.bias_delta
    }

    pub fn set_bias_delta(&mut self, bias_delta: f64) {
        self.bias_delta = bias_delta;
    }

    /// Incoming weights, ordered like the previous layer's neurons.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of the connection coming from upstream neuron `upstream`.
    ///
    /// # Panics
    /// Panics if `upstream` is not an index of the previous layer.
    pub fn weight(&self, upstream: usize) -> f64 {
        self.weights[upstream]
    }

    pub fn set_weight(&mut self, upstream: usize, weight: f64) {
        self.weights[upstream] = weight;
    }

    pub fn weight_delta(&self, upstream: usize) -> f64 {
        self.weight_deltas[upstream]
    }

    pub fn set_weight_delta(&mut self, upstream: usize, delta: f64) {
        self.weight_deltas[upstream] = delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn input_neuron_has_no_connections() {
        let neuron = Neuron::input(3);
        assert_eq!(neuron.index(), 3);
        assert!(neuron.is_input());
        assert!(neuron.weights().is_empty());
        assert_eq!(neuron.bias_weight(), None);
    }

    #[test]
    fn connected_neuron_samples_weights_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let neuron = Neuron::connected(0, 50, &mut rng);

        assert_eq!(neuron.weights().len(), 50);
        assert!(neuron.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
        let bias = neuron.bias_weight().unwrap();
        assert!((-1.0..=1.0).contains(&bias));
        assert!((0..50).all(|j| neuron.weight_delta(j) == 0.0));
        assert_eq!(neuron.bias_delta(), 0.0);
    }

    #[test]
    fn weighted_sum_includes_bias() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut upstream = vec![Neuron::input(0), Neuron::input(1)];
        upstream[0].set_output(2.0);
        upstream[1].set_output(-1.0);

        let mut neuron = Neuron::connected(0, 2, &mut rng);
        neuron.set_weight(0, 0.5);
        neuron.set_weight(1, 0.25);
        neuron.set_bias_weight(0.1);

        neuron.sum_weighted_input(&upstream);
        assert!((neuron.output() - 0.85).abs() < 1e-12);

        neuron.activate();
        assert!((neuron.output() - 1.0 / (1.0 + (-0.85f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn input_neuron_ignores_bias_and_sum() {
        let mut neuron = Neuron::input(0);
        neuron.set_output(0.7);
        neuron.set_bias_weight(3.0);
        neuron.sum_weighted_input(&[]);
        assert_eq!(neuron.output(), 0.7);
        assert_eq!(neuron.bias_weight(), None);
    }
}
