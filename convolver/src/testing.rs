use ndarray::{ArrayD, IxDyn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::traits::Element;

/// Mean squared error allowed between two results of the same computation.
pub fn tolerance<T>() -> f64 {
    if size_of::<T>() == size_of::<f32>() { 1e-6 } else { 1e-9 }
}

pub fn mean_squared_error<T: Element + Into<f64>>(got: &ArrayD<T>, expected: &ArrayD<T>) -> f64 {
    let total: f64 = got
        .iter()
        .zip(expected.iter())
        .map(|(a, b)| {
            let d = Into::<f64>::into(*a) - Into::<f64>::into(*b);
            d * d
        })
        .sum();
    total / got.len().max(1) as f64
}

/// Same shape and mean squared error within [`tolerance`].
pub fn assert_narray_like<T: Element + Into<f64>>(got: &ArrayD<T>, shape: &[usize], expected: &[T]) {
    assert_eq!(got.shape(), shape, "shapes are different");
    let expected = ArrayD::from_shape_vec(IxDyn(shape), expected.to_vec()).unwrap();
    let mse = mean_squared_error(got, &expected);
    assert!(mse <= tolerance::<T>(), "mean squared error {mse}\nexpected: {expected:?}\ngot: {got:?}");
}

pub fn random_array(rng: &mut ChaCha8Rng, shape: &[usize]) -> ArrayD<f64> {
    let normal = Normal::new(0.5, 0.15).unwrap();
    ArrayD::from_shape_simple_fn(IxDyn(shape), || normal.sample(rng))
}

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
