//! # relstore - In-Process Columnar Relation Storage
//!
//! relstore is an in-process storage engine for typed relations: build
//! rows into per-column buffers, freeze them into an immutable relation
//! with a canonical schema, and derive sorted read-only views without
//! copying a single cell. The design priorities:
//!
//! - **Columnar, arena-backed storage**: one bump arena per column keeps a
//!   column's elements contiguous and frees them collectively
//! - **Type erasure at the seams**: uniform byte-stride access over
//!   arbitrarily-typed columns, with typed decoding confined to per-type
//!   operation tables
//! - **Strict schema algebra**: canonical ordering, duplicate and
//!   type-conflict detection at construction, never later
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use relstore::{Relation, RelationBuilder, TableView, TypeTag, Value};
//!
//! let mut builder = RelationBuilder::from_names(
//!     &["Z", "Y", "X"],
//!     &[TypeTag::Int, TypeTag::Float, TypeTag::Double],
//! )?;
//! builder.push_row(&[Value::Int(2), Value::Float(6.28), Value::Double(5.43)])?;
//! builder.push_row(&[Value::Int(200), Value::Float(4.5), Value::Double(2.3)])?;
//!
//! let relation = Arc::new(Relation::new(builder.release())?);
//! assert_eq!(relation.ty().to_string(), "{ X : Double, Y : Float, Z : Int }");
//!
//! let by_x = TableView::new(relation, &["X", "Y", "Z"])?;
//! println!("{}", relstore::render::table_to_string(&by_x));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Relation / TableView / RelationBuilder │
//! │        (RelationRead + render)           │
//! ├─────────────────────────────────────────┤
//! │   Value Operations (per-type singletons) │
//! ├─────────────────────────────────────────┤
//! │   Column Storage (erased, byte-stride)   │
//! ├─────────────────────────────────────────┤
//! │   Per-Column Bump Arenas (bumpalo)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The schema model (`TypeTag`, `ColumnType`, `RelationType` and its
//! union/intersect algebra) sits beside the stack and is shared by every
//! layer.

pub mod error;
pub mod ops;
pub mod relation;
pub mod render;
pub mod storage;
pub mod types;

pub use error::{ArgumentError, NotImplemented, SchemaError};
pub use ops::{value_ops_for, ValueOps};
pub use relation::{Relation, RelationBuilder, RelationParts, RelationRead, TableView};
pub use types::{ColumnType, ColumnTypeList, RelationType, TypeTag, Value};
