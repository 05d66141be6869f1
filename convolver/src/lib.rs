//! N-dimensional "valid" correlation with two interchangeable algorithms, a
//! cost-model dispatcher choosing between them, max-pool downsampling and a
//! dense rectified-linear layer.
//!
//! ```
//! use ndarray::{IxDyn, arr1};
//!
//! let signal = arr1(&[0.3_f64, 0.4, 0.5]).into_dyn();
//! let kernel = arr1(&[1.3, -0.5]).into_dyn();
//! let result = convolver::convolve(&signal, &kernel).unwrap();
//! assert!((result[IxDyn(&[0])] - 0.19).abs() < 1e-12);
//! ```

pub mod conv;
pub mod error;
pub mod malgebra;
pub mod nn;
pub mod traits;

#[cfg(test)]
mod testing;

use ndarray::ArrayD;

pub use conv::{ConvMethod, Convolver, cost::CostModel, direct::DirectCorrelator, spectral::SpectralCorrelator};
pub use conv::{direct::correlate_direct, spectral::correlate_spectral};
pub use error::{Error, Result};
pub use nn::{dense::evaluate_layer, pool::max_pool};
pub use traits::{ConfigFS, Correlator, Element};

/// Correlates with whichever algorithm the default cost model predicts is cheaper.
pub fn convolve<T: Element>(signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>> {
    Convolver::default().convolve(signal, kernel)
}
