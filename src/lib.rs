//! Tukey-fence outlier filtering for in-memory tabular data.
//!
//! Given a [`Table`] and the name of one numeric column, this crate
//! computes the first and third quartiles of that column, derives an
//! acceptance range from them using the 1.5 × IQR rule (Tukey's
//! fences), and returns the rows whose value falls inside the range.
//! Row order is preserved, the other columns pass through untouched,
//! and the input table is never mutated.
//!
//! ```
//! use fences::{OutlierFilter, Table, Value};
//!
//! let ages = Table::new(
//!     vec!["age".into()],
//!     [22, 38, 26, 35, 35, 2, 80]
//!         .iter()
//!         .map(|&age| vec![Value::Int(age)])
//!         .collect(),
//! );
//!
//! let filtered = OutlierFilter::new("age").filter(&ages).unwrap();
//!
//! // 80 lies beyond the upper fence; 2 does not reach the lower one.
//! assert_eq!(filtered.table.len(), 6);
//! assert_eq!(filtered.report.removed, 1);
//! ```
//!
//! The quartile interpolation rule is pinned (see
//! [`Percentiles::at`](univariate::Percentiles::at)) so that two builds
//! of this crate, serial or parallel, agree bit for bit on the fences.

#![warn(missing_docs)]

mod error;
mod filter;
mod float;

pub mod table;
pub mod univariate;

pub use crate::error::Error;
pub use crate::filter::{Filtered, Masked, MissingPolicy, OutlierFilter, Report};
pub use crate::float::Float;
pub use crate::table::{Table, Value};
