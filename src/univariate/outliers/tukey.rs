//! Tukey's method
//!
//! The method uses two "fences" to classify the data. All the
//! observations "inside" the fences are considered "normal", and the
//! rest are considered outliers.
//!
//! The fences are computed from the quartiles of the sample, according
//! to the following formula:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < lower || x > upper;
//! ```
//!
//! An observation sitting exactly on a fence is inside it: the
//! acceptance range is inclusive on both ends.
//!
//! Some ASCII art for the visually oriented people:
//!
//! ``` ignore
//!     OUTLIERS                 NORMAL-ish                OUTLIERS
//!    x    x    |   o o  o    o   o o  o   o  o  |       x     x
//!              lower                            upper
//! ```

use serde::{Deserialize, Serialize};

use crate::float::Float;
use crate::univariate::Sample;

/// The quartiles of a sample together with the fences derived from them.
///
/// `lower() <= q1() <= q3() <= upper()` always holds: the interquartile
/// range is never negative, so the fences bracket the quartiles. When
/// the IQR is zero the fences collapse to `[q1, q1]` and every value
/// different from `q1` classifies as an outlier; that is the rule
/// working as intended on a constant center, not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fences<A>
where
    A: Float,
{
    q1: A,
    q3: A,
    lower: A,
    upper: A,
}

impl<A> Fences<A>
where
    A: Float,
{
    /// Derives the fences from the first and third quartiles.
    pub fn from_quartiles(q1: A, q3: A) -> Fences<A> {
        debug_assert!(q1 <= q3);

        let iqr = q3 - q1;
        let k = A::cast(1.5_f32);

        Fences {
            q1,
            q3,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        }
    }

    /// The first quartile the fences were derived from.
    pub fn q1(&self) -> A {
        self.q1
    }

    /// The third quartile the fences were derived from.
    pub fn q3(&self) -> A {
        self.q3
    }

    /// The interquartile range.
    pub fn iqr(&self) -> A {
        self.q3 - self.q1
    }

    /// The lower fence, `q1 - 1.5 * iqr`.
    pub fn lower(&self) -> A {
        self.lower
    }

    /// The upper fence, `q3 + 1.5 * iqr`.
    pub fn upper(&self) -> A {
        self.upper
    }

    /// Checks whether `x` lies inside the fences, both ends inclusive.
    pub fn contains(&self, x: A) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Computes the fences of a sample.
///
/// - Time: `O(N log N) where N = length`
pub fn fences<A>(sample: &Sample<A>) -> Fences<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    let (q1, _, q3) = sample.percentiles().quartiles();

    Fences::from_quartiles(q1, q3)
}
