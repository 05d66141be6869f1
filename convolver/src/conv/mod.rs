use crate::conv::{cost::CostModel, direct::DirectCorrelator, spectral::SpectralCorrelator};

pub mod cost;
pub mod direct;
pub mod fs;
pub mod impliment;
pub mod spectral;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum ConvMethod{
    FFT,
    Canonical,
}

/// Dispatching correlator: asks the cost model for the cheaper method and
/// hands the work to the matching strategy.
///
/// Both strategies are plain values, so any [`crate::traits::Correlator`]
/// can stand in for either of them.
#[derive(Clone, Debug)]
pub struct Convolver<D = DirectCorrelator, S = SpectralCorrelator> {
    pub cost: CostModel,
    pub canonical: D,
    pub fft: S,
}
