use std::iter::Sum;

use ndarray::ArrayD;
use num_traits::Float;
use rustfft::FftNum;

use crate::error::Result;

/// Floating point element accepted by every operation of the crate.
pub trait Element: FftNum + Float + Sum {
    /// Exact conversion of an element count, used to normalize inverse transforms.
    fn from_count(count: usize) -> Self;
}

impl Element for f32 {
    fn from_count(count: usize) -> Self {
        count as f32
    }
}

impl Element for f64 {
    fn from_count(count: usize) -> Self {
        count as f64
    }
}

/// One way of computing a "valid" N-dimensional correlation.
///
/// Implementations receive shapes that were already validated by the caller
/// but must still validate them when called directly.
pub trait Correlator<T: Element> {
    fn correlate(&self, signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>>;
}

pub trait ConfigFS {
    type OutType;
    async fn save(&self, path: &str) -> Result<()>;
    async fn read(path: &str) -> Result<Self::OutType>;
}
