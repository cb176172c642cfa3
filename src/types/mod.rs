//! # Type & Schema Model
//!
//! This module provides the type system for relations: primitive type tags,
//! named column types, and the canonicalized relation schema with its
//! union/intersect algebra.
//!
//! ## Module Structure
//!
//! - `tag`: Closed `TypeTag` enum of storable primitive types
//! - `column`: `ColumnType` (name + tag) and ordered column-type lists
//! - `schema`: `RelationType`, the canonical sorted duplicate-free schema
//! - `value`: Runtime `Value` enum used at the typed push/read boundary
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `TypeTag` | Single-byte type discriminant |
//! | `ColumnType` | Named, typed column descriptor |
//! | `ColumnTypeList` | Insertion-ordered column list (builders, views) |
//! | `RelationType` | Canonical schema, sorted by column name |
//! | `Value` | Runtime value for row construction and read-back |
//!
//! A `ColumnTypeList` preserves whatever order the caller supplied and is
//! what builders and table views carry. A `RelationType` is the same data
//! canonicalized: sorted ascending by column name with duplicate names
//! rejected at construction.

mod column;
mod schema;
mod tag;
mod value;

pub use column::{column_types_to_string, write_column_types, ColumnType, ColumnTypeList};
pub use schema::RelationType;
pub use tag::TypeTag;
pub use value::Value;
