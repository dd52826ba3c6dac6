pub mod sse;

pub use sse::SumSquaredError;
