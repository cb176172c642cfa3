//! # Value Operations Registry
//!
//! One canonical, process-lifetime operation table per element type. A
//! `&'static dyn ValueOps` is the erased layer's window back into typed
//! behavior: it compares, formats and decodes opaque cells, and it is the
//! factory for new arena-bound column storages of its element type.
//!
//! | Tag | Element | Singleton |
//! |--------|------------|--------------|
//! | Bool | `BoolByte` | `BOOL_OPS` |
//! | Int | `i32` | `INT_OPS` |
//! | Float | `f32` | `FLOAT_OPS` |
//! | Double | `f64` | `DOUBLE_OPS` |
//!
//! The remaining tags (Void, String, Date, Time, Object) have no element
//! representation in this core; `value_ops_for` fails on them with
//! `ArgumentError::UnsupportedType`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use eyre::{bail, Result};

use crate::error::ArgumentError;
use crate::storage::{decode, BoolByte, CellRef, ColumnArena, ColumnStorage, ColumnStore, Element};
use crate::types::{TypeTag, Value};

/// Typed operations over opaque cells of one element type.
pub trait ValueOps {
    /// The element type's tag.
    fn type_tag(&self) -> TypeTag;

    /// Total order over two cells of this element type. For floats, two
    /// NaNs compare equal and a NaN compares greater than any non-NaN.
    fn compare(&self, a: CellRef<'_>, b: CellRef<'_>) -> Ordering;

    /// Formats one cell as text.
    fn write_cell(&self, cell: CellRef<'_>, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Decodes one cell into a runtime value.
    fn read(&self, cell: CellRef<'_>) -> Value;

    /// New empty column storage for this element type, bound to `arena`.
    fn make_storage(&self, arena: Arc<ColumnArena>) -> Box<dyn ColumnStore>;
}

impl fmt::Debug for dyn ValueOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueOps")
            .field("type_tag", &self.type_tag())
            .finish()
    }
}

/// The `ValueOps` implementation for element type `T`. Stateless; only the
/// per-type statics below should exist.
pub struct TypedOps<T>(std::marker::PhantomData<T>);

impl<T: Element> TypedOps<T> {
    const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: Element> ValueOps for TypedOps<T> {
    fn type_tag(&self) -> TypeTag {
        T::TAG
    }

    fn compare(&self, a: CellRef<'_>, b: CellRef<'_>) -> Ordering {
        T::total_cmp(&decode::<T>(a.bytes()), &decode::<T>(b.bytes()))
    }

    fn write_cell(&self, cell: CellRef<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        decode::<T>(cell.bytes()).write(out)
    }

    fn read(&self, cell: CellRef<'_>) -> Value {
        decode::<T>(cell.bytes()).to_value()
    }

    fn make_storage(&self, arena: Arc<ColumnArena>) -> Box<dyn ColumnStore> {
        Box::new(ColumnStorage::<T>::new(arena))
    }
}

pub static BOOL_OPS: TypedOps<BoolByte> = TypedOps::new();
pub static INT_OPS: TypedOps<i32> = TypedOps::new();
pub static FLOAT_OPS: TypedOps<f32> = TypedOps::new();
pub static DOUBLE_OPS: TypedOps<f64> = TypedOps::new();

/// The canonical operation table for a type tag.
///
/// Fails with `ArgumentError::UnsupportedType` for tags that have no
/// element representation in this core.
pub fn value_ops_for(tag: TypeTag) -> Result<&'static dyn ValueOps> {
    match tag {
        TypeTag::Bool => Ok(&BOOL_OPS),
        TypeTag::Int => Ok(&INT_OPS),
        TypeTag::Float => Ok(&FLOAT_OPS),
        TypeTag::Double => Ok(&DOUBLE_OPS),
        TypeTag::Void
        | TypeTag::String
        | TypeTag::Date
        | TypeTag::Time
        | TypeTag::Object => bail!(ArgumentError::UnsupportedType { tag }),
    }
}
