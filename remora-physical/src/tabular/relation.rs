//! This module defines [Relation], the table type that holds the ground
//! tuples of a single predicate.

use hashbrown::HashSet;
use itertools::Itertools;

use crate::datavalues::{AnyDataValue, DataValue};
use crate::error::Error;

/// Render a row of datavalues the way values appear in results.
pub fn format_row(row: &[AnyDataValue]) -> String {
    row.iter()
        .map(|value| value.canonical_string())
        .join(", ")
}

/// A growing collection of distinct ground tuples of a fixed arity.
///
/// Rows are kept in insertion order and stamped with the execution step that
/// derived them, so that a later evaluation round can restrict itself to the
/// rows added since a given step (the semi-naive "delta" view).
/// Rows are only ever added, never removed or altered; duplicate derivations
/// collapse, which is what guarantees termination of the fixpoint.
#[derive(Debug, Default, Clone)]
pub struct Relation {
    /// Number of values in each row
    arity: usize,

    /// All rows in insertion order
    rows: Vec<Vec<AnyDataValue>>,
    /// Step in which the row of the same index was first derived;
    /// nondecreasing, since steps only move forward
    steps: Vec<usize>,

    /// Set of all rows, used for duplicate elimination
    known: HashSet<Vec<AnyDataValue>>,
}

impl Relation {
    /// Create a new empty [Relation] of the given arity.
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            rows: Vec::new(),
            steps: Vec::new(),
            known: HashSet::new(),
        }
    }

    /// Return the arity of this relation.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Return the number of (distinct) rows currently stored.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return whether this relation holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add a row derived in the given step.
    ///
    /// Returns `true` if the row was new and `false` if it was already
    /// present; in the latter case the original step stamp is kept.
    ///
    /// # Errors
    /// The length of the row differs from the arity of this relation.
    pub fn insert(&mut self, step: usize, row: Vec<AnyDataValue>) -> Result<bool, Error> {
        if row.len() != self.arity {
            return Err(Error::TupleArityMismatch {
                length: row.len(),
                arity: self.arity,
            });
        }

        debug_assert!(self.steps.last().map_or(true, |&last| last <= step));

        if !self.known.insert(row.clone()) {
            return Ok(false);
        }

        log::trace!("new row ({}) in step {step}", format_row(&row));

        self.rows.push(row);
        self.steps.push(step);

        Ok(true)
    }

    /// Return whether the given row is present.
    pub fn contains(&self, row: &[AnyDataValue]) -> bool {
        self.known.contains(row)
    }

    /// Return an iterator over all rows in insertion order.
    ///
    /// The iterator is lazy and restartable; it reflects all insertions that
    /// happened before it was created.
    pub fn rows(&self) -> impl Iterator<Item = &[AnyDataValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Return an iterator over the rows derived in the given step or later.
    pub fn rows_since(&self, step: usize) -> impl Iterator<Item = &[AnyDataValue]> {
        let start = self.steps.partition_point(|&row_step| row_step < step);
        self.rows[start..].iter().map(Vec::as_slice)
    }

    /// Return an iterator over the rows derived strictly before the given step.
    pub fn rows_before(&self, step: usize) -> impl Iterator<Item = &[AnyDataValue]> {
        let end = self.steps.partition_point(|&row_step| row_step < step);
        self.rows[..end].iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;

    use super::{format_row, Relation};
    use crate::datavalues::AnyDataValue;
    use crate::error::Error;

    fn row(values: &[i64]) -> Vec<AnyDataValue> {
        values
            .iter()
            .map(|&value| AnyDataValue::new_integer_from_i64(value))
            .collect()
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut relation = Relation::new(2);

        assert!(relation.insert(0, row(&[1, 2])).unwrap());
        assert!(relation.insert(0, row(&[1, 3])).unwrap());
        assert!(!relation.insert(1, row(&[1, 2])).unwrap());

        assert_eq!(relation.len(), 2);
        assert!(relation.contains(&row(&[1, 2])));
        assert!(!relation.contains(&row(&[2, 1])));
    }

    #[test]
    fn test_numeric_coercion_collapses_rows() {
        let mut relation = Relation::new(1);

        assert!(relation
            .insert(0, vec![AnyDataValue::new_integer_from_i64(3)])
            .unwrap());
        assert!(!relation
            .insert(1, vec![AnyDataValue::new_double_from_f64(3.0).unwrap()])
            .unwrap());

        assert_eq!(relation.len(), 1);
    }

    #[test]
    fn test_step_views() {
        let mut relation = Relation::new(1);

        relation.insert(0, row(&[1])).unwrap();
        relation.insert(0, row(&[2])).unwrap();
        relation.insert(2, row(&[3])).unwrap();
        relation.insert(3, row(&[4])).unwrap();

        let delta: Vec<_> = relation.rows_since(2).collect();
        assert_eq!(delta, vec![row(&[3]).as_slice(), row(&[4]).as_slice()]);

        let old: Vec<_> = relation.rows_before(2).collect();
        assert_eq!(old.len(), 2);

        assert_eq!(relation.rows().count(), 4);
        // restartable
        assert_eq!(relation.rows().count(), 4);
    }

    #[test]
    fn test_arity_mismatch() {
        let mut relation = Relation::new(2);

        let result = relation.insert(0, row(&[1]));
        assert!(matches!(
            result,
            Err(Error::TupleArityMismatch { length: 1, arity: 2 })
        ));
    }

    #[test]
    fn test_format_row() {
        let values = vec![
            AnyDataValue::new_integer_from_i64(1),
            AnyDataValue::new_double_from_f64(2.0).unwrap(),
            AnyDataValue::new_string("three".to_string()),
        ];

        assert_eq!(format_row(&values), "1, 2, three".to_string());
    }

    #[quickcheck]
    fn prop_reinsertion_never_grows(values: Vec<i64>) -> bool {
        let mut relation = Relation::new(1);

        for &value in &values {
            relation.insert(0, row(&[value])).unwrap();
        }
        let size = relation.len();

        for &value in &values {
            relation.insert(1, row(&[value])).unwrap();
        }

        relation.len() == size
    }
}
