use ndarray::{ArrayD, IxDyn, Slice};

use crate::{
    error::{Error, Result},
    malgebra::shape::MultiIndex,
    traits::Element,
};

/// Windowed-maximum downsampling, tiled independently along every axis.
///
/// Output extent per axis is `ceil(extent / tile_size)`. Output `i` covers input
/// positions `i * tile_size .. min(extent, i * tile_size + pool_size)`, so
/// windows overlap when `pool_size > tile_size` and trailing windows are
/// clipped rather than padded.
pub fn max_pool<T: Element>(input: &ArrayD<T>, tile_size: usize, pool_size: usize) -> Result<ArrayD<T>> {
    if tile_size < 1 {
        return Err(Error::InvalidArgument { reason: "tile size must be at least 1" });
    }
    if pool_size < 1 {
        return Err(Error::InvalidArgument { reason: "pool size must be at least 1" });
    }
    let extents = input.shape();
    let out_shape: Vec<usize> = extents.iter().map(|n| n.div_ceil(tile_size)).collect();
    tracing::trace!(input = ?extents, ?out_shape, tile_size, pool_size, "max pool");

    let values: Vec<T> = MultiIndex::new(&out_shape)
        .map(|out| {
            input
                .slice_each_axis(|ax| {
                    let d = ax.axis.index();
                    let start = out[d] * tile_size;
                    Slice::from(start..extents[d].min(start + pool_size))
                })
                .fold(T::neg_infinity(), |max, &x| max.max(x))
        })
        .collect();
    Ok(ArrayD::from_shape_vec(IxDyn(&out_shape), values)?)
}
