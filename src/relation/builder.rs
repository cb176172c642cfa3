//! Row-at-a-time construction of column storages.
//!
//! A `RelationBuilder` holds its columns in insertion order and keeps every
//! column storage at the same length: `push_row` validates the whole row
//! before any column is touched. Duplicate column names are accepted here;
//! canonicalization, and the duplicate check that comes with it, happen at
//! `Relation::new`.
//!
//! `release()` is the only path from builder to relation: it moves the four
//! parts arrays out as a `RelationParts` and leaves the builder empty.

use std::sync::Arc;

use eyre::{bail, Result};

use crate::error::ArgumentError;
use crate::ops::{value_ops_for, ValueOps};
use crate::relation::RelationRead;
use crate::storage::{CellRef, ColumnArena, ColumnStore};
use crate::types::{ColumnType, ColumnTypeList, TypeTag, Value};

/// Accumulates named, typed columns in insertion order.
#[derive(Default)]
pub struct RelationBuilder {
    cols: ColumnTypeList,
    ops: Vec<&'static dyn ValueOps>,
    arenas: Vec<Arc<ColumnArena>>,
    storages: Vec<Box<dyn ColumnStore>>,
}

/// The parts a builder releases: column types, operation tables, arenas and
/// storages, all in insertion order with equal lengths.
pub struct RelationParts {
    pub(crate) cols: ColumnTypeList,
    pub(crate) ops: Vec<&'static dyn ValueOps>,
    pub(crate) arenas: Vec<Arc<ColumnArena>>,
    pub(crate) storages: Vec<Box<dyn ColumnStore>>,
}

impl RelationBuilder {
    /// An empty, zero-column builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder over the given column descriptors. Fails with
    /// `ArgumentError::UnsupportedType` if a descriptor names a tag with no
    /// element representation.
    pub fn with_columns(cols: ColumnTypeList) -> Result<Self> {
        let mut ops = Vec::with_capacity(cols.len());
        let mut arenas = Vec::with_capacity(cols.len());
        let mut storages = Vec::with_capacity(cols.len());

        for col in &cols {
            let col_ops = value_ops_for(col.tag())?;
            let arena = Arc::new(ColumnArena::new());
            storages.push(col_ops.make_storage(arena.clone()));
            arenas.push(arena);
            ops.push(col_ops);
        }

        Ok(Self {
            cols,
            ops,
            arenas,
            storages,
        })
    }

    /// A builder from parallel name and tag arrays. Fails with
    /// `ArgumentError::ColumnCountMismatch` if their lengths differ.
    pub fn from_names(names: &[&str], tags: &[TypeTag]) -> Result<Self> {
        if names.len() != tags.len() {
            bail!(ArgumentError::ColumnCountMismatch {
                expected: names.len(),
                found: tags.len(),
            });
        }
        let cols = names
            .iter()
            .zip(tags)
            .map(|(name, tag)| ColumnType::new(*name, *tag))
            .collect();
        Self::with_columns(cols)
    }

    /// Appends one record, one value per column in insertion order.
    ///
    /// The whole row is validated first: a wrong value count fails with
    /// `ArgumentError::ColumnCountMismatch`, a wrong value type with
    /// `ArgumentError::TypeMismatch`, and in both cases no column has been
    /// mutated. Every column storage then grows by exactly one element.
    pub fn push_row(&mut self, row: &[Value]) -> Result<()> {
        if row.len() != self.cols.len() {
            bail!(ArgumentError::ColumnCountMismatch {
                expected: self.cols.len(),
                found: row.len(),
            });
        }
        for (col, value) in self.cols.iter().zip(row) {
            if value.tag() != col.tag() {
                bail!(ArgumentError::TypeMismatch {
                    column: col.name().to_string(),
                    expected: col.tag(),
                    found: value.tag(),
                });
            }
        }
        for (storage, value) in self.storages.iter_mut().zip(row) {
            storage.push_value(value)?;
        }
        Ok(())
    }

    /// Column types in insertion order.
    pub fn column_types(&self) -> &[ColumnType] {
        &self.cols
    }

    /// Decodes record `idx` back into values, in insertion order. Panics if
    /// `idx` is out of bounds.
    pub fn row(&self, idx: usize) -> Vec<Value> {
        self.ops
            .iter()
            .zip(&self.storages)
            .map(|(ops, storage)| ops.read(storage.cell(idx)))
            .collect()
    }

    /// Moves the accumulated parts out and resets the builder to empty.
    pub fn release(&mut self) -> RelationParts {
        RelationParts {
            cols: std::mem::take(&mut self.cols),
            ops: std::mem::take(&mut self.ops),
            arenas: std::mem::take(&mut self.arenas),
            storages: std::mem::take(&mut self.storages),
        }
    }
}

impl RelationRead for RelationBuilder {
    fn columns(&self) -> &[ColumnType] {
        &self.cols
    }

    fn len(&self) -> usize {
        self.storages.first().map_or(0, |s| s.len())
    }

    fn at(&self, row: usize, col: usize) -> CellRef<'_> {
        self.storages[col].cell(row)
    }

    fn value_ops(&self) -> &[&'static dyn ValueOps] {
        &self.ops
    }
}

impl std::fmt::Debug for RelationBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationBuilder")
            .field("columns", &self.cols)
            .field("rows", &self.len())
            .finish()
    }
}
