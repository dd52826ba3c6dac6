use rand::Rng;

use crate::layers::neuron::Neuron;

/// An ordered, fixed-size group of neurons.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Builds an input layer of `size` unconnected neurons.
    pub fn new(size: usize) -> Layer {
        Layer {
            neurons: (0..size).map(Neuron::input).collect(),
        }
    }

    /// Builds a layer of `size` neurons, each fully connected to every
    /// neuron of `previous`.
    pub fn connected_to<R: Rng>(size: usize, previous: &Layer, rng: &mut R) -> Layer {
        let upstream_len = previous.len();
        Layer {
            neurons: (0..size)
                .map(|index| Neuron::connected(index, upstream_len, rng))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Mutable access to individual neurons. The slice cannot grow or shrink.
    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Writes `values` into the neurons' outputs, in order.
    pub fn load(&mut self, values: &[f64]) {
        debug_assert_eq!(values.len(), self.neurons.len());
        for (neuron, &value) in self.neurons.iter_mut().zip(values) {
            neuron.set_output(value);
        }
    }

    pub fn sum_weights(&mut self, previous: &Layer) {
        for neuron in &mut self.neurons {
            neuron.sum_weighted_input(&previous.neurons);
        }
    }

    pub fn activate(&mut self) {
        for neuron in &mut self.neurons {
            neuron.activate();
        }
    }

    /// Snapshot of every neuron's current output.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::output).collect()
    }
}
