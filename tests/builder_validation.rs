use backprop_nn::{ConfigurationBuilder, NetworkError};
use rstest::rstest;

fn parameter_of(result: backprop_nn::Result<ConfigurationBuilder>) -> &'static str {
    match result {
        Err(NetworkError::Configuration { parameter, .. }) => parameter,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("value was accepted"),
    }
}

#[rstest]
#[case::input(ConfigurationBuilder::new().input_neurons(0), "input layer size")]
#[case::hidden(ConfigurationBuilder::new().hidden_neurons(0), "hidden layer size")]
#[case::output(ConfigurationBuilder::new().output_neurons(0), "output layer size")]
#[case::epochs(ConfigurationBuilder::new().max_epochs(0), "max epochs")]
#[case::min_error(ConfigurationBuilder::new().min_error(1.0), "min error")]
#[case::min_error_above(ConfigurationBuilder::new().min_error(3.5), "min error")]
#[case::learning_rate(ConfigurationBuilder::new().learning_rate(100.0), "learning rate")]
#[case::momentum(ConfigurationBuilder::new().momentum(1.0), "momentum")]
fn rejects_out_of_range_values(
    #[case] result: backprop_nn::Result<ConfigurationBuilder>,
    #[case] parameter: &str,
) {
    assert_eq!(parameter_of(result), parameter);
}

#[rstest]
#[case(1, 1, 1)]
#[case(20, 4, 4)]
#[case(64, 16, 10)]
fn accepts_any_positive_layer_sizes(#[case] input: usize, #[case] hidden: usize, #[case] output: usize) {
    let engine = ConfigurationBuilder::new()
        .input_neurons(input).unwrap()
        .hidden_neurons(hidden).unwrap()
        .output_neurons(output).unwrap()
        .build_seeded(0);

    assert_eq!(engine.input_layer_size(), input);
    assert_eq!(engine.output_layer_size(), output);
    let topology = engine.topology();
    assert!(topology.hidden_layer().neurons().iter().all(|n| n.weights().len() == input));
    assert!(topology.output_layer().neurons().iter().all(|n| n.weights().len() == hidden));
}

#[rstest]
#[case(0.99, 0.0, 0.99)]
#[case(-5.0, 99.9, -0.5)]
fn accepts_values_just_inside_bounds(#[case] min_error: f64, #[case] learning_rate: f64, #[case] momentum: f64) {
    let builder = ConfigurationBuilder::new()
        .min_error(min_error).unwrap()
        .learning_rate(learning_rate).unwrap()
        .momentum(momentum).unwrap();

    let config = builder.configuration();
    assert_eq!(config.min_error(), min_error);
    assert_eq!(config.learning_rate(), learning_rate);
    assert_eq!(config.momentum(), momentum);
}

#[test]
fn failed_setter_does_not_apply_partially() {
    let builder = ConfigurationBuilder::new().momentum(0.2).unwrap();
    let before = builder.configuration().clone();
    assert!(builder.clone().momentum(2.0).is_err());
    assert_eq!(builder.configuration(), &before);
}
