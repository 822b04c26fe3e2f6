use thiserror::Error;

use crate::table::Value;

/// Failures surfaced by the filter, all detected during validation.
///
/// Every variant is raised before any quartile or filtering work
/// begins, so a failed call leaves no partial result. None of them is
/// recoverable internally; the caller decides whether to skip the
/// column or report upstream. Retrying is pointless as the operation is
/// deterministic.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The requested column name does not exist in the table's schema.
    #[error("no column named `{0}`")]
    ColumnNotFound(String),

    /// The target column holds a value that cannot be ordered as a
    /// number. Reports the first offending row.
    #[error("column `{column}` is not numeric: found `{found}` at row {row}")]
    NonNumericColumn {
        /// The target column name.
        column: String,
        /// Index of the first row holding an unorderable value.
        row: usize,
        /// The offending value.
        found: Value,
    },

    /// After excluding missing values, the target column has zero
    /// numeric observations and its quartiles are undefined.
    #[error("column `{0}` has no numeric observations")]
    EmptyColumn(String),
}
