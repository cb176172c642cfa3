//! # Error Types
//!
//! Typed error values for schema construction, argument validation, and the
//! declared-but-unimplemented operations. All of them implement
//! `std::error::Error` and travel through `eyre::Result`, so callers match
//! on the concrete kind with `downcast_ref` when they need to.
//!
//! Validation is eager: every error below is raised at a construction or
//! call boundary, before any partial state is written.

use std::fmt;

use crate::types::TypeTag;

/// Schema canonicalization and algebra failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two columns share a name within one schema.
    DuplicateColumn { name: String },
    /// A shared column name carries different types on the two sides of a
    /// schema operation.
    TypeConflict {
        name: String,
        left: TypeTag,
        right: TypeTag,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateColumn { name } => {
                write!(f, "column name '{}' repeated", name)
            }
            SchemaError::TypeConflict { name, left, right } => {
                write!(
                    f,
                    "types for column '{}' do not match: {} and {}",
                    name, left, right
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Caller-supplied argument failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A row or descriptor list does not match the declared column count.
    ColumnCountMismatch { expected: usize, found: usize },
    /// A requested column name does not exist in the schema.
    UnknownColumn { name: String },
    /// An internal parts array does not match the column count.
    SizeMismatch {
        what: &'static str,
        len: usize,
        columns: usize,
    },
    /// A pushed value's type does not match its column's declared type.
    TypeMismatch {
        column: String,
        expected: TypeTag,
        found: TypeTag,
    },
    /// A type tag with no element representation in this core.
    UnsupportedType { tag: TypeTag },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::ColumnCountMismatch { expected, found } => {
                write!(
                    f,
                    "expected {} columns but {} were supplied",
                    expected, found
                )
            }
            ArgumentError::UnknownColumn { name } => {
                write!(f, "unknown column '{}'", name)
            }
            ArgumentError::SizeMismatch { what, len, columns } => {
                write!(
                    f,
                    "{} count {} does not match column count {}",
                    what, len, columns
                )
            }
            ArgumentError::TypeMismatch {
                column,
                expected,
                found,
            } => {
                write!(
                    f,
                    "column '{}' holds {} but was given {}",
                    column, expected, found
                )
            }
            ArgumentError::UnsupportedType { tag } => {
                write!(f, "no element representation for type {}", tag)
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

/// Raised by operations that are declared but deliberately unimplemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotImplemented;

impl fmt::Display for NotImplemented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not yet implemented")
    }
}

impl std::error::Error for NotImplemented {}
