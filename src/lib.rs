//! Three-layer perceptron trained with online backpropagation and momentum.
//!
//! Build an engine with [`ConfigurationBuilder`], register samples with
//! [`TrainingEngine::add_learning_pair`], call [`TrainingEngine::learn`] and
//! query it with [`TrainingEngine::result_for_inputs`].

pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result, VectorKind};
pub use layers::{Layer, Neuron};
pub use network::{ConfigurationBuilder, NetworkConfiguration, NetworkTopology};
pub use optim::MomentumSgd;
pub use train::{NoProgress, ProgressReport, ProgressSink, TrainingControl, TrainingEngine, TrainingState};
