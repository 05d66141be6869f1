//! Shape arithmetic and row-major addressing shared by every transform.
//!
//! Multi-indices are ordered outer axis first, so axis `rank - 1` is the
//! fastest moving one, matching the layout `ndarray` uses by default.

use std::borrow::Cow;

use ndarray::ArrayD;

use crate::error::{Error, Result};

/// Number of elements described by `shape`. The empty shape (rank 0) holds one element.
pub fn size(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major strides, in elements, for a contiguous buffer of `shape`.
pub fn strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for d in (0..shape.len().saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * shape[d + 1];
    }
    strides
}

/// Flat position of `index` inside a row-major buffer with the given strides.
pub fn flat_offset(index: &[usize], strides: &[usize]) -> usize {
    index.iter().zip(strides).map(|(i, s)| i * s).sum()
}

/// Checks the signal/kernel invariant: equal rank, non-empty kernel axes and
/// every kernel axis no longer than the matching signal axis.
pub fn validate_pair(signal: &[usize], kernel: &[usize]) -> Result<()> {
    if signal.len() != kernel.len() {
        return Err(Error::shape("signal and kernel rank differ", signal, kernel));
    }
    if kernel.iter().any(|&k| k == 0) {
        return Err(Error::shape("kernel has an empty axis", signal, kernel));
    }
    if signal.iter().zip(kernel).any(|(s, k)| k > s) {
        return Err(Error::shape("kernel larger than signal", signal, kernel));
    }
    Ok(())
}

/// Shape of a "valid" correlation: `signal[d] - kernel[d] + 1` per axis.
pub fn result_shape(signal: &[usize], kernel: &[usize]) -> Result<Vec<usize>> {
    validate_pair(signal, kernel)?;
    Ok(signal.iter().zip(kernel).map(|(s, k)| s - k + 1).collect())
}

/// Shape of the full linear correlation: `signal[d] + kernel[d] - 1` per axis.
pub fn combined_shape(signal: &[usize], kernel: &[usize]) -> Result<Vec<usize>> {
    validate_pair(signal, kernel)?;
    Ok(signal.iter().zip(kernel).map(|(s, k)| s + k - 1).collect())
}

/// Flat offsets, inside a row-major buffer of `outer` shape, of every position
/// of an `inner` window anchored at the origin. Offsets follow the window's own
/// row-major order, so adding them to an anchor's offset walks the window.
pub fn window_offsets(outer: &[usize], inner: &[usize]) -> Vec<usize> {
    let outer_strides = strides(outer);
    MultiIndex::new(inner)
        .map(|index| flat_offset(&index, &outer_strides))
        .collect()
}

/// Logical row-major elements of `array`, borrowed when it is already contiguous.
pub fn row_major<T: Clone>(array: &ArrayD<T>) -> Cow<'_, [T]> {
    match array.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(array.iter().cloned().collect()),
    }
}

/// Odometer over every multi-index of a shape in row-major order.
///
/// The empty shape yields exactly one (empty) index; any zero extent yields none.
#[derive(Clone, Debug)]
pub struct MultiIndex<'a> {
    shape: &'a [usize],
    next: Option<Vec<usize>>,
}

impl<'a> MultiIndex<'a> {
    pub fn new(shape: &'a [usize]) -> Self {
        let next = if shape.iter().any(|&n| n == 0) {
            None
        } else {
            Some(vec![0; shape.len()])
        };
        Self { shape, next }
    }
}

impl Iterator for MultiIndex<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();
        let mut d = self.shape.len();
        self.next = loop {
            if d == 0 {
                break None;
            }
            d -= 1;
            following[d] += 1;
            if following[d] < self.shape[d] {
                break Some(following);
            }
            following[d] = 0;
        };
        Some(current)
    }
}
