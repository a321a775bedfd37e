pub mod banded_gradient;
pub mod smooth_spectrum;
