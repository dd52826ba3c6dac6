use backprop_nn::{ConfigurationBuilder, ProgressReport, TrainingControl};

fn main() -> backprop_nn::Result<()> {
    env_logger::init();

    let mut network = ConfigurationBuilder::new()
        .input_neurons(2)?
        .hidden_neurons(3)?
        .output_neurons(1)?
        .max_epochs(10000)?
        .min_error(0.001)?
        .learning_rate(0.5)?
        .momentum(0.3)?
        .build_seeded(2024);

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    for (input, expected) in inputs.iter().zip(&expected_outputs) {
        network.add_learning_pair(input.clone(), expected.clone())?;
    }

    // Halve the learning rate once the error is small enough.
    let mut report_every_1000 = |report: &ProgressReport, control: &mut TrainingControl| {
        if report.epoch % 1000 == 0 {
            println!("Epoch {}: error = {:.6}", report.epoch, report.overall_error);
        }
        if report.overall_error < 0.05 && control.learning_rate() > 0.25 {
            if let Err(e) = control.update_hyperparameters(0.25, control.momentum()) {
                eprintln!("{e}");
            }
        }
    };
    let last = network.learn_with(&mut report_every_1000);
    println!("Stopped after {} epochs, error = {:.6}", last.epoch + 1, last.overall_error);

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.result_for_inputs(input)?[0]);
    }
    Ok(())
}
