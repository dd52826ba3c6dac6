/// Smallest activation the sigmoid reports.
const FLOOR: f64 = f64::MIN_POSITIVE;
/// Largest `f64` strictly below 1.0.
const CEILING: f64 = 1.0 - f64::EPSILON / 2.0;

/// The logistic activation used by every hidden and output neuron.
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`, saturating at the nearest representable values
    /// inside (0, 1) so that a neuron never reports exactly 0 or 1.
    pub fn function(x: f64) -> f64 {
        (1.0 / (1.0 + (-x).exp())).clamp(FLOOR, CEILING)
    }

    /// Derivative expressed through the activation itself: `y * (1 - y)`.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}
