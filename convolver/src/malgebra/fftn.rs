use ndarray::{ArrayD, Axis};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;
use rustfft::{FftDirection, FftPlanner};

use crate::traits::Element;

/// In-place N-dimensional transform: a 1-D FFT over every lane of every axis.
///
/// Neither direction normalizes; an inverse after a forward transform scales
/// every element by the element count.
pub fn fftn<T: Element>(data: &mut ArrayD<Complex<T>>, planner: &mut FftPlanner<T>, direction: FftDirection) {
    for axis in 0..data.ndim() {
        let len = data.len_of(Axis(axis));
        if len < 2 {
            continue;
        }
        let fft = planner.plan_fft(len, direction);
        let mut lane_buf = vec![Complex::zero(); len];
        let mut scratch = vec![Complex::zero(); fft.get_inplace_scratch_len()];
        for mut lane in data.lanes_mut(Axis(axis)) {
            lane_buf.iter_mut().zip(lane.iter()).for_each(|(dst, src)| *dst = *src);
            fft.process_with_scratch(&mut lane_buf, &mut scratch);
            lane.iter_mut().zip(lane_buf.iter()).for_each(|(dst, src)| *dst = *src);
        }
    }
    tracing::trace!(shape = ?data.shape(), ?direction, "fftn");
}
