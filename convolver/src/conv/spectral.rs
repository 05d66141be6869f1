//! Correlation computed as a circular convolution in the frequency domain.
//!
//! Per axis, with `S` the signal extent, `K` the kernel extent and
//! `N = S + K - 1`:
//!
//! - the signal is copied into a zero-filled length-`N` axis at offset `a = K / 2`;
//! - the kernel is reversed and rotated left by `b = K / 2`, i.e. tap `k` lands on
//!   `(K - 1 - k - b) mod N`;
//! - the circular convolution `y` of the two then satisfies
//!   `y[o + K - 1 - b + a] = sum_k signal[o + k] * kernel[k]`, and since `a == b`
//!   the valid correlation is the window `[K - 1, S)` of `y`.
//!
//! The padded supports together span exactly `N` samples, so no output inside
//! that window is aliased by wraparound.

use ndarray::{ArrayD, IxDyn, Slice, Zip};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;
use rustfft::{FftDirection, FftPlanner};

use crate::{
    error::Result,
    malgebra::{fftn::fftn, shape},
    traits::{Correlator, Element},
};

/// FFT based correlation, O(N log N) per axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpectralCorrelator;

impl<T: Element> Correlator<T> for SpectralCorrelator {
    fn correlate(&self, signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>> {
        correlate_spectral(signal, kernel)
    }
}

/// Offset of the signal inside its padded axis. Equal to `(N - S + 1) / 2`.
fn signal_offset(kernel_len: usize) -> usize {
    kernel_len / 2
}

/// Padded-axis position of kernel tap `k`.
fn kernel_position(k: usize, kernel_len: usize, combined_len: usize) -> usize {
    let rotation = kernel_len / 2;
    (kernel_len - 1 - k + combined_len - rotation) % combined_len
}

pub fn correlate_spectral<T: Element>(signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>> {
    let combined = shape::combined_shape(signal.shape(), kernel.shape())?;
    tracing::trace!(signal = ?signal.shape(), kernel = ?kernel.shape(), ?combined, "spectral correlation");

    let mut padded_signal = ArrayD::from_elem(IxDyn(&combined), Complex::<T>::zero());
    let kernel_shape = kernel.shape();
    padded_signal
        .slice_each_axis_mut(|ax| {
            let axis = ax.axis.index();
            let start = signal_offset(kernel_shape[axis]);
            Slice::from(start..start + signal.len_of(ax.axis))
        })
        .zip_mut_with(signal, |dst, &src| *dst = Complex::new(src, T::zero()));

    let mut padded_kernel = ArrayD::from_elem(IxDyn(&combined), Complex::<T>::zero());
    let mut target = vec![0; combined.len()];
    for (index, &tap) in kernel.indexed_iter() {
        for (d, slot) in target.iter_mut().enumerate() {
            *slot = kernel_position(index[d], kernel_shape[d], combined[d]);
        }
        padded_kernel[IxDyn(&target)] = Complex::new(tap, T::zero());
    }

    let mut planner = FftPlanner::new();
    fftn(&mut padded_signal, &mut planner, FftDirection::Forward);
    fftn(&mut padded_kernel, &mut planner, FftDirection::Forward);
    Zip::from(&mut padded_signal)
        .and(&padded_kernel)
        .for_each(|s, &k| *s = *s * k);
    fftn(&mut padded_signal, &mut planner, FftDirection::Inverse);

    let scale = T::from_count(shape::size(&combined));
    let window = padded_signal.slice_each_axis(|ax| {
        let axis = ax.axis.index();
        Slice::from(kernel_shape[axis] - 1..signal.shape()[axis])
    });
    Ok(window.mapv(|c| c.re / scale))
}
