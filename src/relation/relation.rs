//! The immutable relation aggregate.
//!
//! `Relation::new` canonicalizes the released builder parts: the schema is
//! sorted by column name (rejecting duplicates), and the operation, arena
//! and storage arrays are permuted to match. After construction nothing
//! mutates; cell access is by canonical column index.

use std::sync::Arc;

use eyre::{bail, Result};

use crate::error::ArgumentError;
use crate::ops::ValueOps;
use crate::relation::{RelationParts, RelationRead};
use crate::storage::{CellRef, ColumnArena, ColumnStore};
use crate::types::{ColumnType, RelationType};

/// Immutable owner of a canonical schema and its column storages.
pub struct Relation {
    ty: RelationType,
    ops: Vec<&'static dyn ValueOps>,
    arenas: Vec<Arc<ColumnArena>>,
    storages: Vec<Box<dyn ColumnStore>>,
}

impl Relation {
    /// Builds a relation from released builder parts.
    ///
    /// Fails with `SchemaError::DuplicateColumn` if two columns share a
    /// name, and with `ArgumentError::SizeMismatch` if a parts array does
    /// not match the column count.
    pub fn new(parts: RelationParts) -> Result<Self> {
        let RelationParts {
            cols,
            ops,
            arenas,
            storages,
        } = parts;

        let ty = RelationType::new(cols.clone())?;

        for (what, len) in [
            ("operation table", ops.len()),
            ("arena", arenas.len()),
            ("storage", storages.len()),
        ] {
            if len != cols.len() {
                bail!(ArgumentError::SizeMismatch {
                    what,
                    len,
                    columns: cols.len(),
                });
            }
        }

        // Permute the parts from insertion order to canonical order.
        let mut parts: Vec<_> = cols
            .iter()
            .zip(ops)
            .zip(arenas)
            .zip(storages)
            .map(|(((col, col_ops), arena), storage)| {
                let canonical = ty
                    .position(col.name())
                    .expect("canonical schema contains every released column");
                (canonical, col_ops, arena, storage)
            })
            .collect();
        parts.sort_by_key(|p| p.0);

        let mut ops = Vec::with_capacity(parts.len());
        let mut arenas = Vec::with_capacity(parts.len());
        let mut storages = Vec::with_capacity(parts.len());
        for (_, col_ops, arena, storage) in parts {
            ops.push(col_ops);
            arenas.push(arena);
            storages.push(storage);
        }

        Ok(Self {
            ty,
            ops,
            arenas,
            storages,
        })
    }

    /// The canonical schema.
    pub fn ty(&self) -> &RelationType {
        &self.ty
    }

    /// Total bytes held by the per-column arenas, superseded growth blocks
    /// included.
    pub fn allocated_bytes(&self) -> usize {
        self.arenas.iter().map(|a| a.allocated_bytes()).sum()
    }
}

impl RelationRead for Relation {
    fn columns(&self) -> &[ColumnType] {
        self.ty.columns()
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

impl std::fmt::Debug for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("ty", &self.ty)
            .field("rows", &self.len())
            .finish()
    }
}
