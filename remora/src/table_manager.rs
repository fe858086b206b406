//! Managing of tables

use std::collections::HashMap;

use remora_physical::datavalues::AnyDataValue;
use remora_physical::tabular::Relation;

use crate::error::Error;
use crate::rule_model::components::tag::Tag;

/// Subset of the rows of a relation that a join step may draw from,
/// expressed relative to the step a rule was last applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowView {
    /// Rows derived strictly before the given step
    Before(usize),
    /// Rows derived in the given step or later (the semi-naive delta)
    Since(usize),
    /// All rows
    All,
}

/// Manager of the relations that facts are materialized into.
///
/// Relations are registered once, at engine initialization,
/// with the name and arity recorded by program analysis;
/// afterwards the registry is fixed and the evaluator's inner loop
/// resolves predicates against it without any re-registration.
/// This is the single owner of all tables of one engine;
/// mutation happens exclusively through `&mut self` while reasoning.
#[derive(Debug, Default)]
pub(crate) struct TableManager {
    /// All relations, addressed by their predicate
    relations: HashMap<Tag, Relation>,
}

impl TableManager {
    /// Create a new empty [TableManager].
    pub(crate) fn new() -> Self {
        Self {
            relations: HashMap::new(),
        }
    }

    /// Register a predicate with its arity, creating an empty relation for it.
    pub(crate) fn register_predicate(&mut self, predicate: Tag, arity: usize) {
        log::trace!("registering predicate {predicate} with arity {arity}");

        self.relations
            .entry(predicate)
            .or_insert_with(|| Relation::new(arity));
    }

    /// Return the arity of the given predicate,
    /// or `None` if the predicate is not registered.
    pub(crate) fn predicate_arity(&self, predicate: &Tag) -> Option<usize> {
        self.relations.get(predicate).map(Relation::arity)
    }

    /// Return the number of rows stored for the given predicate,
    /// or `None` if the predicate is not registered.
    pub(crate) fn count_rows(&self, predicate: &Tag) -> Option<usize> {
        self.relations.get(predicate).map(Relation::len)
    }

    /// Add a row for the given predicate, derived in the given step.
    /// Returns `true` if the row was new.
    ///
    /// # Errors
    /// The predicate is not registered,
    /// or the row does not match the registered arity.
    pub(crate) fn insert(
        &mut self,
        predicate: &Tag,
        step: usize,
        row: Vec<AnyDataValue>,
    ) -> Result<bool, Error> {
        let relation = self
            .relations
            .get_mut(predicate)
            .ok_or_else(|| Error::UnknownRelation {
                predicate: predicate.clone(),
            })?;

        Ok(relation.insert(step, row)?)
    }

    /// Return whether the given row is present for the given predicate.
    pub(crate) fn contains(&self, predicate: &Tag, row: &[AnyDataValue]) -> bool {
        self.relations
            .get(predicate)
            .map_or(false, |relation| relation.contains(row))
    }

    /// Return an iterator over the rows of the given predicate
    /// restricted to the given [RowView].
    ///
    /// # Errors
    /// The predicate is not registered.
    pub(crate) fn rows(
        &self,
        predicate: &Tag,
        view: RowView,
    ) -> Result<Box<dyn Iterator<Item = &[AnyDataValue]> + '_>, Error> {
        let relation = self
            .relations
            .get(predicate)
            .ok_or_else(|| Error::UnknownRelation {
                predicate: predicate.clone(),
            })?;

        Ok(match view {
            RowView::Before(step) => Box::new(relation.rows_before(step)),
            RowView::Since(step) => Box::new(relation.rows_since(step)),
            RowView::All => Box::new(relation.rows()),
        })
    }

    /// Return an iterator over all rows of the given predicate,
    /// or an empty iterator if the predicate is not registered.
    pub(crate) fn all_rows(&self, predicate: &Tag) -> impl Iterator<Item = &[AnyDataValue]> {
        self.relations
            .get(predicate)
            .into_iter()
            .flat_map(Relation::rows)
    }
}
