//! Concrete element representations for column storage.
//!
//! An `Element` is a fixed-size, plain-data type that a column can store:
//! it knows its `TypeTag`, totally orders itself, converts to and from the
//! runtime `Value` enum, and formats itself for display. The zerocopy
//! bounds are what let the byte-stride storage layer move elements around
//! without knowing their type.
//!
//! ## Float Ordering
//!
//! Floating-point elements lift IEEE's partial order to a total order:
//! ordinary comparisons map directly, two NaNs compare equal, and a NaN
//! compares greater than any non-NaN value. This is the order table views
//! sort by, so NaN-bearing rows always land at the high end of an
//! ascending sort.

use std::cmp::Ordering;

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::types::{TypeTag, Value};

/// A fixed-size element type storable in a column.
pub trait Element: FromBytes + IntoBytes + Immutable + Copy + 'static {
    const TAG: TypeTag;

    /// Total order over elements.
    fn total_cmp(a: &Self, b: &Self) -> Ordering;

    /// Wraps this element in the runtime value enum.
    fn to_value(self) -> Value;

    /// Extracts this element type from a runtime value, if the variant
    /// matches.
    fn from_value(value: &Value) -> Option<Self>;

    /// Formats this element for display.
    fn write(self, out: &mut dyn std::fmt::Write) -> std::fmt::Result;
}

/// One-byte storage representation of a boolean column element.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromBytes, IntoBytes, Immutable)]
pub struct BoolByte(u8);

impl BoolByte {
    pub fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for BoolByte {
    fn from(v: bool) -> Self {
        Self(v as u8)
    }
}

impl Element for BoolByte {
    const TAG: TypeTag = TypeTag::Bool;

    fn total_cmp(a: &Self, b: &Self) -> Ordering {
        a.get().cmp(&b.get())
    }

    fn to_value(self) -> Value {
        Value::Bool(self.get())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(Self::from(*v)),
            _ => None,
        }
    }

    fn write(self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(out, "{}", self.get())
    }
}

impl Element for i32 {
    const TAG: TypeTag = TypeTag::Int;

    fn total_cmp(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }

    fn to_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn write(self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(out, "{}", self)
    }
}

// NaN == NaN, and NaN sorts above every ordinary value.
fn float_total_cmp(ord: Option<Ordering>, a_nan: bool, b_nan: bool) -> Ordering {
    match ord {
        Some(ord) => ord,
        None => match (a_nan, b_nan) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => unreachable!("partial_cmp is total for non-NaN floats"),
        },
    }
}

impl Element for f32 {
    const TAG: TypeTag = TypeTag::Float;

    fn total_cmp(a: &Self, b: &Self) -> Ordering {
        float_total_cmp(a.partial_cmp(b), a.is_nan(), b.is_nan())
    }

    fn to_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn write(self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(out, "{}", self)
    }
}

impl Element for f64 {
    const TAG: TypeTag = TypeTag::Double;

    fn total_cmp(a: &Self, b: &Self) -> Ordering {
        float_total_cmp(a.partial_cmp(b), a.is_nan(), b.is_nan())
    }

    fn to_value(self) -> Value {
        Value::Double(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    fn write(self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(out, "{}", self)
    }
}
