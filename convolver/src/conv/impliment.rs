use ndarray::ArrayD;

use crate::{
    conv::{ConvMethod, Convolver, cost::CostModel, direct::DirectCorrelator, spectral::SpectralCorrelator},
    error::Result,
    traits::{Correlator, Element},
};

impl Default for Convolver {
    fn default() -> Self {
        Self::new(CostModel::default())
    }
}

impl Convolver {
    pub fn new(cost: CostModel) -> Self {
        Self {
            cost,
            canonical: DirectCorrelator,
            fft: SpectralCorrelator,
        }
    }
}

impl<D, S> Convolver<D, S> {
    pub fn with_correlators(cost: CostModel, canonical: D, fft: S) -> Self {
        Self { cost, canonical, fft }
    }

    /// Method [`Convolver::convolve`] would use for this shape pair.
    pub fn method_for(&self, signal: &[usize], kernel: &[usize]) -> Result<ConvMethod> {
        self.cost.select(signal, kernel)
    }

    pub fn convolve<T>(&self, signal: &ArrayD<T>, kernel: &ArrayD<T>) -> Result<ArrayD<T>>
    where
        T: Element,
        D: Correlator<T>,
        S: Correlator<T>,
    {
        match self.method_for(signal.shape(), kernel.shape())? {
            ConvMethod::Canonical => self.canonical.correlate(signal, kernel),
            ConvMethod::FFT => self.fft.correlate(signal, kernel),
        }
    }
}
