//! Float trait

use cast::From;
use num_traits::float;

/// The numeric bound used throughout the statistics core: an IEEE float
/// that can additionally be cast from the integer and literal types the
/// percentile math needs, and shared across threads for the parallel
/// sort.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + Sync + Send
{
}

impl Float for f32 {}
impl Float for f64 {}
