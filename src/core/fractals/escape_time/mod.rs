pub mod algorithm;
pub mod errors;
pub mod seed;
pub mod smooth;
