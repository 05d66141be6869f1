use ndarray::ArrayD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    error::Result,
    malgebra::shape::{self, MultiIndex},
    traits::{Correlator, Element},
};

/// Brute-force correlation, O(|result| * |kernel|).
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectCorrelator;

impl<T: Element> Correlator<T> for DirectCorrelator {
    fn correlate(&self, signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>> {
        correlate_direct(signal, kernel)
    }
}

/// `result[o] = sum_k signal[o + k] * kernel[k]` over every kernel multi-index `k`.
///
/// Kernel taps are visited in row-major order for every output element, so the
/// summation order never depends on the thread that computes it.
pub fn correlate_direct<T: Element>(signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>> {
    let out_shape = shape::result_shape(signal.shape(), kernel.shape())?;
    tracing::trace!(signal = ?signal.shape(), kernel = ?kernel.shape(), "direct correlation");

    let signal_buf = shape::row_major(signal);
    let kernel_buf = shape::row_major(kernel);
    // flat offset of each tap relative to the window anchor
    let taps = shape::window_offsets(signal.shape(), kernel.shape());
    let signal_strides = shape::strides(signal.shape());
    let anchors: Vec<usize> = MultiIndex::new(&out_shape)
        .map(|o| shape::flat_offset(&o, &signal_strides))
        .collect();

    let dot = |anchor: &usize| -> T {
        taps.iter()
            .zip(kernel_buf.iter())
            .map(|(tap, weight)| signal_buf[anchor + tap] * *weight)
            .sum()
    };

    #[cfg(feature = "parallel")]
    let values: Vec<T> = anchors.par_iter().map(dot).collect();
    #[cfg(not(feature = "parallel"))]
    let values: Vec<T> = anchors.iter().map(dot).collect();

    Ok(ArrayD::from_shape_vec(out_shape, values)?)
}

#[cfg(test)]
mod tests {
    use ndarray::{ArrayD, IxDyn, arr1, arr2};

    use super::*;
    use crate::{error::Error, testing::assert_narray_like};

    #[test]
    fn readme_example() {
        let signal = arr1(&[0.3, 0.4, 0.5]).into_dyn();
        let kernel = arr1(&[1.3, -0.5]).into_dyn();
        let result = correlate_direct(&signal, &kernel).unwrap();
        assert_narray_like(&result, &[2], &[0.19, 0.27]);
    }

    #[test]
    fn two_dimensional_example() {
        let signal = arr2(&[[0.3, 0.4, 0.5], [0.6, 0.8, 0.2], [0.9, 1.0, 0.1]]).into_dyn();
        let kernel = arr2(&[[1.2, -0.5], [0.5, -1.3]]).into_dyn();
        let result = correlate_direct(&signal, &kernel).unwrap();
        assert_narray_like(&result, &[2, 2], &[-0.58, 0.37, -0.53, 1.23]);
    }

    #[test]
    fn variety_of_lengths() {
        let signal = arr1(&[0.3, 0.4, 0.5, 0.2, 0.6]).into_dyn();
        let cases: [(&[f64], &[f64]); 3] = [
            (&[1.1, -0.7], &[0.05, 0.09, 0.41, -0.2]),
            (&[1.1, -0.7, 2.1], &[1.1, 0.51, 1.67]),
            (&[0.6, -0.5, -0.4, 0.7], &[-0.08, 0.33]),
        ];
        for (kernel, expected) in cases {
            let kernel = arr1(kernel).into_dyn();
            let result = correlate_direct(&signal, &kernel).unwrap();
            assert_narray_like(&result, &[expected.len()], expected);
        }
    }

    #[test]
    fn equal_shapes_give_full_dot_product() {
        let signal = ArrayD::from_shape_fn(IxDyn(&[2, 3, 2]), |ix| (ix[0] + 2 * ix[1] + 3 * ix[2]) as f64 * 0.25);
        let kernel = ArrayD::from_shape_fn(IxDyn(&[2, 3, 2]), |ix| 1.0 - (ix[0] * ix[1] + ix[2]) as f64 * 0.5);
        let result = correlate_direct(&signal, &kernel).unwrap();
        let dot: f64 = signal.iter().zip(kernel.iter()).map(|(a, b)| a * b).sum();
        assert_eq!(result.shape(), &[1, 1, 1]);
        assert!((result.iter().next().unwrap() - dot).abs() < 1e-12);
    }

    #[test]
    fn non_standard_layout_is_read_logically() {
        let signal = arr2(&[[0.3, 0.6, 0.9], [0.4, 0.8, 1.0], [0.5, 0.2, 0.1]]).reversed_axes().into_dyn();
        let kernel = arr2(&[[1.2, -0.5], [0.5, -1.3]]).into_dyn();
        let result = correlate_direct(&signal, &kernel).unwrap();
        assert_narray_like(&result, &[2, 2], &[-0.58, 0.37, -0.53, 1.23]);
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let signal = arr1(&[0.3, 0.4]).into_dyn();
        let kernel = arr1(&[1.0, 2.0, 3.0]).into_dyn();
        assert!(matches!(correlate_direct(&signal, &kernel), Err(Error::ShapeMismatch { .. })));
        let kernel = arr2(&[[1.0]]).into_dyn();
        assert!(matches!(correlate_direct(&signal, &kernel), Err(Error::ShapeMismatch { .. })));
    }
}
