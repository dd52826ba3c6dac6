/// Half sum of squared errors: `Σ 0.5 * (expected - actual)²`, not averaged.
pub struct SumSquaredError;

impl SumSquaredError {
    /// Error contributed by one sample's output vector.
    pub fn loss(actual: &[f64], expected: &[f64]) -> f64 {
        actual.iter().zip(expected.iter())
            .map(|(a, e)| 0.5 * (e - a).powi(2))
            .sum()
    }

    /// Per-output signal error of a sigmoid output layer:
    /// `(expected - actual) * actual * (1 - actual)`.
    pub fn output_signals(actual: &[f64], expected: &[f64]) -> Vec<f64> {
        actual.iter().zip(expected.iter())
            .map(|(a, e)| (e - a) * a * (1.0 - a))
            .collect()
    }
}
