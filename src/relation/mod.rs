//! # Relations, Builders and Views
//!
//! The three aggregates of the engine and the read contract they share.
//!
//! ```text
//! RelationBuilder --release()--> RelationParts --Relation::new()--> Relation
//!     (insertion order,              (one-shot         (canonical order,
//!      mutable, typed push)           ownership move)   immutable)
//!                                                          |
//!                                              TableView::new(Arc<Relation>)
//!                                                  (column subset + sorted
//!                                                   row permutation, no
//!                                                   copied cell data)
//! ```
//!
//! `RelationRead` is the common read surface: column types, record count,
//! cell access and the per-column operation tables. The builder, the
//! relation and the view all implement it, which is what lets the renderer
//! treat them uniformly.

use std::ops::Range;

use eyre::{bail, Result};

use crate::error::NotImplemented;
use crate::ops::ValueOps;
use crate::storage::CellRef;
use crate::types::ColumnType;

mod builder;
mod relation;
mod view;

pub use builder::{RelationBuilder, RelationParts};
pub use relation::Relation;
pub use view::TableView;

/// A contiguous run of records. Declared for the slicing operations, which
/// are not implemented yet.
#[derive(Debug)]
pub struct RowSlice {
    _private: (),
}

/// A contiguous run of cells within one column. Declared for the slicing
/// operations, which are not implemented yet.
#[derive(Debug)]
pub struct ColSlice {
    _private: (),
}

/// Uniform read access over a builder, relation or view.
pub trait RelationRead {
    /// Column types in this aggregate's presentation order.
    fn columns(&self) -> &[ColumnType];

    /// Number of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Opaque handle to the cell at (`row`, `col`) in presentation order.
    /// Panics if either index is out of bounds.
    fn at(&self, row: usize, col: usize) -> CellRef<'_>;

    /// Per-column operation tables, parallel to `columns()`.
    fn value_ops(&self) -> &[&'static dyn ValueOps];

    /// Record range extraction. Declared but not implemented; always fails
    /// with `NotImplemented`.
    fn row_slice(&self, _rows: Range<usize>) -> Result<RowSlice> {
        bail!(NotImplemented)
    }

    /// Column range extraction. Declared but not implemented; always fails
    /// with `NotImplemented`.
    fn col_slice(&self, _col: usize, _rows: Range<usize>) -> Result<ColSlice> {
        bail!(NotImplemented)
    }
}
