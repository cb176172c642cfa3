//! # Relation Schema and Schema Algebra
//!
//! A `RelationType` is a column-type list in canonical form: sorted
//! ascending by column name, with duplicate names rejected at construction.
//! Canonical form makes structural equality positional and lets the algebra
//! below run as linear merges.
//!
//! ## Operations
//!
//! | Operation | Semantics | Complexity |
//! |-----------|-----------|------------|
//! | `new` | sort + adjacent duplicate scan | O(n log n) |
//! | `union_` | merge-join by name, types must agree on shared names | O(a + b) |
//! | `intersect` | keep shared names, types must agree | O(a + b) |
//! | `project`, `minus` | declared stubs, always fail | - |
//!
//! `union_` and `intersect` are commutative on schemas whose shared names
//! agree on type; the empty schema is the identity of `union_`.

use eyre::{bail, Result};
use hashbrown::HashMap;

use crate::error::{NotImplemented, SchemaError};
use crate::types::{write_column_types, ColumnType, ColumnTypeList, TypeTag};

/// Canonical, sorted, duplicate-free schema of a relation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RelationType {
    cols: ColumnTypeList,
}

impl RelationType {
    /// Canonicalizes `cols`: sorts ascending by column name and rejects
    /// duplicate names with `SchemaError::DuplicateColumn`.
    pub fn new(mut cols: ColumnTypeList) -> Result<Self> {
        cols.sort();
        for pair in cols.windows(2) {
            if pair[0].name() == pair[1].name() {
                bail!(SchemaError::DuplicateColumn {
                    name: pair[0].name().to_string(),
                });
            }
        }
        Ok(Self { cols })
    }

    /// The zero-column schema.
    pub fn empty() -> Self {
        Self { cols: Vec::new() }
    }

    pub fn columns(&self) -> &[ColumnType] {
        &self.cols
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Canonical index of the column with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.cols
            .binary_search_by(|c| c.name().cmp(name))
            .ok()
    }

    /// Schema union: merge-join of two canonical schemas by name. A name
    /// present in both sides must carry the same type on both, else
    /// `SchemaError::TypeConflict`. The result is sorted by construction.
    pub fn union_(a: &Self, b: &Self) -> Result<Self> {
        let mut cols = ColumnTypeList::with_capacity(a.len() + b.len());

        let mut a_it = a.cols.iter().peekable();
        let mut b_it = b.cols.iter().peekable();

        loop {
            match (a_it.peek().copied(), b_it.peek().copied()) {
                (None, None) => break,
                (Some(ac), None) => {
                    cols.push(ac.clone());
                    a_it.next();
                }
                (None, Some(bc)) => {
                    cols.push(bc.clone());
                    b_it.next();
                }
                (Some(ac), Some(bc)) => {
                    if ac.name() == bc.name() {
                        if ac.tag() != bc.tag() {
                            bail!(SchemaError::TypeConflict {
                                name: ac.name().to_string(),
                                left: ac.tag(),
                                right: bc.tag(),
                            });
                        }
                        cols.push(ac.clone());
                        a_it.next();
                        b_it.next();
                    } else if ac.name() < bc.name() {
                        cols.push(ac.clone());
                        a_it.next();
                    } else {
                        cols.push(bc.clone());
                        b_it.next();
                    }
                }
            }
        }

        // Sorted and duplicate-free by construction; skip the re-sort.
        Ok(Self { cols })
    }

    /// Schema intersection: keeps columns of `a` whose name appears in `b`.
    /// Shared names with differing types fail with
    /// `SchemaError::TypeConflict`; names absent from `b` are dropped
    /// silently.
    pub fn intersect(a: &Self, b: &Self) -> Result<Self> {
        let b_names: HashMap<&str, TypeTag> =
            b.cols.iter().map(|c| (c.name(), c.tag())).collect();

        let mut cols = ColumnTypeList::new();
        for col in &a.cols {
            if let Some(&b_tag) = b_names.get(col.name()) {
                if col.tag() != b_tag {
                    bail!(SchemaError::TypeConflict {
                        name: col.name().to_string(),
                        left: col.tag(),
                        right: b_tag,
                    });
                }
                cols.push(col.clone());
            }
        }
        Ok(Self { cols })
    }

    /// Column-subset projection. Declared but not implemented; always fails
    /// with `NotImplemented`.
    pub fn project(_a: &Self, _names: &[&str]) -> Result<Self> {
        bail!(NotImplemented)
    }

    /// Schema difference. Declared but not implemented; always fails with
    /// `NotImplemented`.
    pub fn minus(_a: &Self, _b: &Self) -> Result<Self> {
        bail!(NotImplemented)
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_column_types(f, &self.cols)
    }
}
