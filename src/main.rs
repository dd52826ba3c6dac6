// Trains the XOR problem and prints one JSON progress line per epoch.
// Usage:
//   backprop-nn [config.json]
// Without a file the network is 2-2-1 with 2000 epochs and min error 0.01.
// Set RUST_LOG=debug for per-epoch log lines.
use std::process::ExitCode;

use backprop_nn::{ConfigurationBuilder, NetworkConfiguration, ProgressReport, TrainingControl};
use log::error;

const XOR: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

fn builder_from_args() -> backprop_nn::Result<ConfigurationBuilder> {
    match std::env::args().nth(1) {
        Some(path) => ConfigurationBuilder::from_configuration(NetworkConfiguration::load_json(&path)?),
        None => ConfigurationBuilder::new()
            .input_neurons(2)?
            .hidden_neurons(2)?
            .output_neurons(1)?
            .max_epochs(2000)?
            .min_error(0.01)?
            .learning_rate(0.5)?
            .momentum(0.3),
    }
}

fn run() -> backprop_nn::Result<()> {
    let mut engine = builder_from_args()?.build();

    for (input, expected) in XOR {
        engine.add_learning_pair(input.to_vec(), vec![expected])?;
    }

    let mut print_report = |report: &ProgressReport, _: &mut TrainingControl| {
        match serde_json::to_string(report) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("could not serialize progress: {e}"),
        }
    };
    engine.learn_with(&mut print_report);

    for (input, _) in XOR {
        let output = engine.result_for_inputs(&input)?;
        println!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
