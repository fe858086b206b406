//! This module defines the multiset comparison
//! used to verify engine results against an expected set of rows.

use std::collections::HashMap;

use remora_physical::datavalues::AnyDataValue;

/// Result of comparing a produced multiset of rows against an expected one.
///
/// The comparison is multiset-exact:
/// every produced row must appear in the expected multiset exactly once
/// and no expected row may remain unmatched.
/// Value comparison follows datavalue equality,
/// so an integral double matches the corresponding integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultisetDiff {
    /// Rows that were produced but not (or not often enough) expected
    pub unexpected: Vec<Vec<AnyDataValue>>,
    /// Rows that were expected but not (or not often enough) produced
    pub missing: Vec<Vec<AnyDataValue>>,
}

impl MultisetDiff {
    /// Return whether the two multisets were equal.
    pub fn is_match(&self) -> bool {
        self.unexpected.is_empty() && self.missing.is_empty()
    }
}

/// Compare a produced sequence of rows against an expected multiset.
///
/// Implemented with a frequency map that is decremented per matched row,
/// so the comparison stays linear in the number of rows.
pub fn compare_multisets<Produced, Expected>(produced: Produced, expected: Expected) -> MultisetDiff
where
    Produced: IntoIterator<Item = Vec<AnyDataValue>>,
    Expected: IntoIterator<Item = Vec<AnyDataValue>>,
{
    let mut remaining = HashMap::<Vec<AnyDataValue>, usize>::new();
    for row in expected {
        *remaining.entry(row).or_insert(0) += 1;
    }

    let mut diff = MultisetDiff::default();

    for row in produced {
        match remaining.get_mut(&row) {
            Some(count) if *count > 0 => *count -= 1,
            _ => diff.unexpected.push(row),
        }
    }

    for (row, count) in remaining {
        for _ in 0..count {
            diff.missing.push(row.clone());
        }
    }

    diff
}
