//! Sorted, column-selecting views over a relation.
//!
//! A `TableView` shares ownership of its relation and holds only indices: a
//! column map from presentation position to canonical column, and a row
//! permutation sorted by a composite comparator over the presentation
//! columns in order. No cell data is copied, and the relation is never
//! mutated.
//!
//! The sort is unstable; rows equal under every presentation column may
//! appear in any order.

use std::cmp::Ordering;
use std::sync::Arc;

use eyre::{bail, Result};
use smallvec::SmallVec;

use crate::error::ArgumentError;
use crate::ops::ValueOps;
use crate::relation::{Relation, RelationRead};
use crate::storage::CellRef;
use crate::types::{ColumnType, ColumnTypeList};

/// Read-only sorted projection of a relation's columns.
pub struct TableView {
    rel: Arc<Relation>,
    col_map: SmallVec<[usize; 8]>,
    row_map: Vec<usize>,
    cols: ColumnTypeList,
    ops: Vec<&'static dyn ValueOps>,
}

impl TableView {
    /// Builds a view presenting `names`, sorted ascending by those columns
    /// in order. Fails with `ArgumentError::UnknownColumn` if a name is not
    /// in the relation's schema.
    pub fn new(rel: Arc<Relation>, names: &[&str]) -> Result<Self> {
        let mut col_map = SmallVec::new();
        let mut cols = ColumnTypeList::with_capacity(names.len());
        let mut ops = Vec::with_capacity(names.len());

        for name in names {
            let Some(idx) = rel
                .ty()
                .columns()
                .iter()
                .position(|c| c.name() == *name)
            else {
                bail!(ArgumentError::UnknownColumn {
                    name: (*name).to_string(),
                });
            };
            col_map.push(idx);
            cols.push(rel.ty().columns()[idx].clone());
            ops.push(rel.value_ops()[idx]);
        }

        let mut row_map: Vec<usize> = (0..rel.len()).collect();
        row_map.sort_unstable_by(|&a, &b| {
            for (col_ops, &ci) in ops.iter().zip(&col_map) {
                match col_ops.compare(rel.at(a, ci), rel.at(b, ci)) {
                    Ordering::Equal => continue,
                    decided => return decided,
                }
            }
            Ordering::Equal
        });

        Ok(Self {
            rel,
            col_map,
            row_map,
            cols,
            ops,
        })
    }

    /// The viewed relation.
    pub fn relation(&self) -> &Arc<Relation> {
        &self.rel
    }
}

impl RelationRead for TableView {
    fn columns(&self) -> &[ColumnType] {
        &self.cols
    }

    fn len(&self) -> usize {
        self.row_map.len()
    }

    fn at(&self, row: usize, col: usize) -> CellRef<'_> {
        self.rel.at(self.row_map[row], self.col_map[col])
    }

    fn value_ops(&self) -> &[&'static dyn ValueOps] {
        &self.ops
    }
}

impl std::fmt::Debug for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("columns", &self.cols)
            .field("rows", &self.row_map.len())
            .finish()
    }
}
