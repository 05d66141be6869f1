use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, Ix1, Ix2};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    traits::Element,
};

fn as_vector<'a, T>(array: &'a ArrayD<T>, name: &'static str, other: &ArrayD<T>) -> Result<ArrayView1<'a, T>> {
    array
        .view()
        .into_dimensionality::<Ix1>()
        .map_err(|_| Error::shape(name, array.shape(), other.shape()))
}

/// Fully connected layer with rectified-linear activation.
///
/// `output[j] = max(0, sum_i weights[j, i] * input[i] - thresholds[j])`.
/// Weights are laid out outputs x inputs.
pub fn evaluate_layer<T: Element>(input: &ArrayD<T>, weights: &ArrayD<T>, thresholds: &ArrayD<T>) -> Result<ArrayD<T>> {
    let input_v = as_vector(input, "layer input must be rank 1", weights)?;
    let thresholds_v = as_vector(thresholds, "thresholds must be rank 1", weights)?;
    let weights_m: ArrayView2<T> = weights
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::shape("weights must be rank 2", weights.shape(), input.shape()))?;
    let (outputs, inputs) = weights_m.dim();
    if inputs != input_v.len() {
        return Err(Error::shape("weight columns differ from input length", weights.shape(), input.shape()));
    }
    if outputs != thresholds_v.len() {
        return Err(Error::shape("weight rows differ from threshold length", weights.shape(), thresholds.shape()));
    }
    tracing::trace!(inputs, outputs, "dense layer");

    let neuron = |j: usize| -> T {
        let raw: T = weights_m
            .row(j)
            .iter()
            .zip(input_v.iter())
            .map(|(&w, &x)| w * x)
            .sum();
        (raw - thresholds_v[j]).max(T::zero())
    };

    #[cfg(feature = "parallel")]
    let values: Vec<T> = (0..outputs).into_par_iter().map(neuron).collect();
    #[cfg(not(feature = "parallel"))]
    let values: Vec<T> = (0..outputs).map(neuron).collect();

    Ok(Array1::from_vec(values).into_dyn())
}
