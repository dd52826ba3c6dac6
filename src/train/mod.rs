pub mod engine;
pub mod progress;
pub mod sink;
pub mod training_set;

pub use engine::{TrainingEngine, TrainingState};
pub use progress::ProgressReport;
pub use sink::{NoProgress, ProgressSink, TrainingControl};
pub use training_set::TrainingSet;
