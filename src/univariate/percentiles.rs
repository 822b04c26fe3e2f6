use cast::usize;

use crate::float::Float;

/// A "view" into the percentiles of a sample
///
/// Construction sorts the observations once; every percentile lookup
/// after that is `O(1)`.
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    pub(crate) fn from_sorted(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(!sorted.is_empty());

        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%
    ///
    /// Percentiles are estimated by linear interpolation between order
    /// statistics at rank `h = p/100 * (n + 1)`, with `h` clamped to
    /// `[1, n]` (the Weibull rule, as used by Minitab and SPSS).
    /// Quartile definitions vary across libraries; this crate pins one
    /// so that fences computed from the same column agree bit for bit
    /// across builds, including the serial and parallel sorts.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _1 = A::cast(1);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);

        let n = self.0.len();
        let h = ((p / _100) * A::cast(n + 1)).max(_1).min(A::cast(n));
        let integer = h.floor();
        let fraction = h - integer;
        // Ranks are one-based; the order statistic at rank `integer`
        // lives at index `integer - 1`.
        let i = usize(integer).unwrap() - 1;
        let floor = self.0[i];

        if fraction == _0 {
            floor
        } else {
            let ceiling = self.0[i + 1];

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let q1 = self.at(A::cast(25));
        let q3 = self.at(A::cast(75));

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }
}
