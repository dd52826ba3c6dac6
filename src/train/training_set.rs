use crate::error::{NetworkError, Result, VectorKind};

/// Input vectors and their expected outputs, kept in registration order.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    input_len: usize,
    output_len: usize,
    inputs: Vec<Vec<f64>>,
    expected_outputs: Vec<Vec<f64>>,
}

impl TrainingSet {
    pub fn new(input_len: usize, output_len: usize) -> TrainingSet {
        TrainingSet {
            input_len,
            output_len,
            inputs: Vec::new(),
            expected_outputs: Vec::new(),
        }
    }

    /// Appends one pair after checking both lengths. Nothing is stored when
    /// either check fails.
    pub fn push(&mut self, input: Vec<f64>, expected: Vec<f64>) -> Result<()> {
        check_len(VectorKind::Input, self.input_len, input.len())?;
        check_len(VectorKind::ExpectedOutput, self.output_len, expected.len())?;
        self.inputs.push(input);
        self.expected_outputs.push(expected);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Input and expected output of sample `index`.
    pub fn get(&self, index: usize) -> Option<(&[f64], &[f64])> {
        let input = self.inputs.get(index)?;
        let expected = self.expected_outputs.get(index)?;
        Some((input, expected))
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn expected_outputs(&self) -> &[Vec<f64>] {
        &self.expected_outputs
    }
}

pub(crate) fn check_len(vector: VectorKind, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NetworkError::DimensionMismatch { vector, expected, actual });
    }
    Ok(())
}
