//! The outlier filter: validation, fence computation, row filtering.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::table::Table;
use crate::univariate::outliers::tukey::{self, Fences};
use crate::univariate::Sample;

/// What to do with rows whose target-column value is missing.
///
/// Missing values never take part in quartile computation; the policy
/// only decides whether their rows appear in the filtered output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MissingPolicy {
    /// Drop the row: an absent value cannot satisfy the inclusive
    /// range test. This is the default.
    Drop,
    /// Keep the row even though its value was never tested.
    Keep,
}

/// Configuration for one outlier-filtering pass over a table.
///
/// The filter computes Tukey's fences from the target column and keeps
/// the rows whose value lies inside them, both ends inclusive. It is a
/// pure function of its inputs: no state survives a call and the input
/// table is never mutated, so one configured filter can be applied to
/// any number of tables, concurrently or not.
///
/// ```
/// use fences::{OutlierFilter, Table, Value};
///
/// let ages = Table::new(
///     vec!["age".into()],
///     [22, 38, 26, 35, 35, 2, 80]
///         .iter()
///         .map(|&age| vec![Value::Int(age)])
///         .collect(),
/// );
///
/// let filtered = OutlierFilter::new("age").filter(&ages).unwrap();
///
/// assert_eq!(filtered.table.len(), 6);
/// assert_eq!(filtered.report.removed, 1);
/// ```
#[derive(Clone, Debug)]
pub struct OutlierFilter {
    column: String,
    missing: MissingPolicy,
}

impl OutlierFilter {
    /// Creates a filter over the named column.
    ///
    /// Rows with a missing value in that column are dropped unless
    /// [`missing`](OutlierFilter::missing) says otherwise.
    pub fn new(column: impl Into<String>) -> OutlierFilter {
        OutlierFilter {
            column: column.into(),
            missing: MissingPolicy::Drop,
        }
    }

    /// Changes the policy for rows whose target value is missing.
    pub fn missing(mut self, policy: MissingPolicy) -> OutlierFilter {
        self.missing = policy;
        self
    }

    /// Computes the per-row acceptance mask without materializing rows.
    ///
    /// Validation happens before any quartile work, in a fixed order:
    /// unknown column, then non-numeric column (the whole column is
    /// scanned, so the error names the first offending row), then empty
    /// column. The returned mask holds exactly one flag per input row,
    /// `true` meaning the row survives.
    pub fn mask(&self, table: &Table) -> Result<Masked, Error> {
        let idx = table
            .column_index(&self.column)
            .ok_or_else(|| Error::ColumnNotFound(self.column.clone()))?;

        let mut observations = Vec::with_capacity(table.len());
        for (row, values) in table.rows().iter().enumerate() {
            let value = &values[idx];

            if value.is_non_numeric() {
                return Err(Error::NonNumericColumn {
                    column: self.column.clone(),
                    row,
                    found: value.clone(),
                });
            }
            if let Some(x) = value.as_f64() {
                observations.push(x);
            }
        }
        if observations.is_empty() {
            return Err(Error::EmptyColumn(self.column.clone()));
        }

        let fences = tukey::fences(Sample::new(&observations));
        debug!(
            "column `{}`: q1 {} q3 {} fences [{}, {}]",
            self.column,
            fences.q1(),
            fences.q3(),
            fences.lower(),
            fences.upper()
        );

        let keep: Vec<bool> = table
            .rows()
            .iter()
            .map(|values| match values[idx].as_f64() {
                Some(x) => fences.contains(x),
                None => self.missing == MissingPolicy::Keep,
            })
            .collect();

        let kept = keep.iter().filter(|&&k| k).count();
        let report = Report {
            fences,
            kept,
            removed: keep.len() - kept,
        };
        debug!(
            "column `{}`: kept {} of {} rows",
            self.column,
            report.kept,
            table.len()
        );

        Ok(Masked { keep, report })
    }

    /// Filters the table, materializing the surviving rows.
    ///
    /// Equivalent to [`mask`](OutlierFilter::mask) followed by row
    /// subsetting, so the two variants cannot disagree. Surviving rows
    /// keep all their columns unchanged and their relative input order;
    /// the input table is not touched.
    pub fn filter(&self, table: &Table) -> Result<Filtered, Error> {
        let Masked { keep, report } = self.mask(table)?;

        Ok(Filtered {
            table: table.subset(&keep),
            report,
        })
    }
}

/// The outcome of a mask pass: one keep-flag per input row.
#[derive(Clone, Debug, PartialEq)]
pub struct Masked {
    /// `keep[i]` is `true` iff row `i` survives the filter.
    pub keep: Vec<bool>,
    /// The fences used and the resulting row counts.
    pub report: Report,
}

/// The outcome of a filtering pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Filtered {
    /// The surviving rows: a row-order-preserving subsequence of the
    /// input with all columns unchanged.
    pub table: Table,
    /// The fences used and the resulting row counts.
    pub report: Report,
}

/// The numbers behind one filtering pass, for reporting upstream.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The quartiles of the target column and the acceptance range
    /// derived from them.
    pub fences: Fences<f64>,
    /// Number of rows retained.
    pub kept: usize,
    /// Number of rows removed: outliers plus, under
    /// [`MissingPolicy::Drop`], rows with a missing target value.
    pub removed: usize,
}

#[cfg(test)]
mod test {
    use quickcheck::{quickcheck, TestResult};

    use super::{MissingPolicy, OutlierFilter};
    use crate::table::{Table, Value};

    fn column_of(values: &[f64]) -> Table {
        Table::new(
            vec!["x".into()],
            values.iter().map(|&x| vec![Value::Float(x)]).collect(),
        )
    }

    quickcheck! {
        // The fences always bracket the quartiles they came from.
        fn fences_bracket_quartiles(values: Vec<f64>) -> TestResult {
            let values: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
            if values.is_empty() {
                return TestResult::discard();
            }

            let masked = OutlierFilter::new("x").mask(&column_of(&values)).unwrap();
            let f = masked.report.fences;

            TestResult::from_bool(
                f.lower() <= f.q1() && f.q1() <= f.q3() && f.q3() <= f.upper(),
            )
        }

        // Every surviving value satisfies the fences of its own pass.
        fn survivors_satisfy_the_fences(values: Vec<f64>) -> TestResult {
            let values: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
            if values.is_empty() {
                return TestResult::discard();
            }

            let filtered = OutlierFilter::new("x").filter(&column_of(&values)).unwrap();
            let f = filtered.report.fences;

            let ok = filtered
                .table
                .column("x")
                .unwrap()
                .all(|v| f.contains(v.as_f64().unwrap()));
            TestResult::from_bool(ok)
        }

        // The output is a row-order-preserving subsequence of the input.
        fn output_is_a_subsequence(values: Vec<f64>) -> TestResult {
            let values: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
            if values.is_empty() {
                return TestResult::discard();
            }

            let input = column_of(&values);
            let filtered = OutlierFilter::new("x").filter(&input).unwrap();

            if filtered.table.len() > input.len() {
                return TestResult::from_bool(false);
            }

            // every output row appears in the input, in order
            let mut cursor = 0;
            for row in filtered.table.rows() {
                match input.rows()[cursor..].iter().position(|r| r == row) {
                    Some(offset) => cursor += offset + 1,
                    None => return TestResult::from_bool(false),
                }
            }

            TestResult::from_bool(true)
        }

        // The mask agrees with the materializing variant row for row.
        fn mask_and_filter_agree(values: Vec<f64>) -> TestResult {
            let values: Vec<f64> = values.into_iter().filter(|x| x.is_finite()).collect();
            if values.is_empty() {
                return TestResult::discard();
            }

            let input = column_of(&values);
            let filter = OutlierFilter::new("x");
            let masked = filter.mask(&input).unwrap();
            let filtered = filter.filter(&input).unwrap();

            let by_mask: Vec<_> = input
                .rows()
                .iter()
                .zip(&masked.keep)
                .filter(|(_, &k)| k)
                .map(|(row, _)| row.clone())
                .collect();

            TestResult::from_bool(
                by_mask == filtered.table.rows()
                    && masked.report == filtered.report
                    && masked.keep.len() == input.len()
                    && masked.report.kept + masked.report.removed == input.len(),
            )
        }
    }

    #[test]
    fn degenerate_distribution_keeps_the_constant_rows() {
        let mut values = vec![7.0; 9];
        values.push(1007.0);
        let filtered = OutlierFilter::new("x").filter(&column_of(&values)).unwrap();

        assert_eq!(filtered.report.fences.iqr(), 0.0);
        assert_eq!(filtered.table.len(), 9);
        assert!(filtered
            .table
            .column("x")
            .unwrap()
            .all(|v| v.as_f64() == Some(7.0)));
    }

    #[test]
    fn missing_policy_controls_row_retention_only() {
        let table = Table::new(
            vec!["x".into()],
            vec![
                vec![Value::Float(1.0)],
                vec![Value::Missing],
                vec![Value::Float(2.0)],
                vec![Value::Float(f64::NAN)],
                vec![Value::Float(3.0)],
            ],
        );

        let dropped = OutlierFilter::new("x").filter(&table).unwrap();
        assert_eq!(dropped.table.len(), 3);
        assert_eq!(dropped.report.removed, 2);

        let kept = OutlierFilter::new("x")
            .missing(MissingPolicy::Keep)
            .filter(&table)
            .unwrap();
        assert_eq!(kept.table.len(), 5);
        assert_eq!(kept.report.removed, 0);

        // the quartiles come from the three present values either way
        assert_eq!(dropped.report.fences, kept.report.fences);
        assert_eq!(dropped.report.fences.q1(), 1.0);
        assert_eq!(dropped.report.fences.q3(), 3.0);
    }
}
