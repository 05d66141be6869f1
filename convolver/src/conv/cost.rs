use crate::{
    conv::ConvMethod,
    error::{Error, Result},
    malgebra::shape,
};

/// Closed-form running time estimates for both correlators.
///
/// Predictions depend on shapes only. The constants are relative weights, not
/// seconds on any particular machine; only their ratio changes which method
/// [`CostModel::select`] returns.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CostModel {
    /// Weight of `prod_d combined[d] * max(ln(combined[d]), 1)`.
    pub spectral_factor: f64,
    /// Weight of `size(result) * size(signal) * size(kernel)`.
    pub direct_factor: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            spectral_factor: 16.0 * 4.55e-8,
            direct_factor: 4.54e-12,
        }
    }
}

impl CostModel {
    pub fn new(spectral_factor: f64, direct_factor: f64) -> Result<Self> {
        let model = Self { spectral_factor, direct_factor };
        model.validate()?;
        Ok(model)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let usable = |f: f64| f.is_finite() && f > 0.0;
        if !usable(self.spectral_factor) || !usable(self.direct_factor) {
            return Err(Error::InvalidArgument {
                reason: "cost factors must be finite and positive",
            });
        }
        Ok(())
    }

    /// Predicted cost of the spectral correlator.
    ///
    /// Each axis contributes `n * max(ln n, 1)` with `n = signal + kernel - 1`,
    /// so a length-1 axis scales the product by one instead of zeroing it.
    pub fn predict_spectral_cost(&self, signal: &[usize], kernel: &[usize]) -> Result<f64> {
        shape::validate_pair(signal, kernel)?;
        let work: f64 = signal
            .iter()
            .zip(kernel)
            .map(|(s, k)| {
                let n = (s + k - 1) as f64;
                n * n.ln().max(1.0)
            })
            .product();
        Ok(self.spectral_factor * work)
    }

    /// Predicted cost of the direct correlator.
    pub fn predict_direct_cost(&self, signal: &[usize], kernel: &[usize]) -> Result<f64> {
        let outputs = shape::size(&shape::result_shape(signal, kernel)?);
        Ok(self.direct_factor * outputs as f64 * shape::size(signal) as f64 * shape::size(kernel) as f64)
    }

    /// Cheaper method for a shape pair; ties go to the direct path.
    pub fn select(&self, signal: &[usize], kernel: &[usize]) -> Result<ConvMethod> {
        let direct = self.predict_direct_cost(signal, kernel)?;
        let spectral = self.predict_spectral_cost(signal, kernel)?;
        let method = if direct <= spectral { ConvMethod::Canonical } else { ConvMethod::FFT };
        tracing::debug!(?signal, ?kernel, direct, spectral, ?method, "convolution method selected");
        Ok(method)
    }
}
