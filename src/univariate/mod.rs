//! Univariate statistics: samples, percentiles, and outlier fences.

mod percentiles;
mod sample;

pub mod outliers;

pub use self::percentiles::Percentiles;
pub use self::sample::Sample;
