//! Primitive type tags for relation columns.
//!
//! `TypeTag` is the closed set of types a relation column can carry. The
//! element representations implemented in this core cover `Bool`, `Int`,
//! `Float` and `Double`; the remaining tags are declared for schema
//! compatibility and gain storage support as element types are added.

/// Single-byte discriminant for the type of a relation column.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Void = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    Double = 4,
    String = 5,
    Date = 6,
    Time = 7,
    Object = 8,
}

impl TypeTag {
    /// Returns the display name of this tag.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Void => "Void",
            TypeTag::Bool => "Bool",
            TypeTag::Int => "Int",
            TypeTag::Float => "Float",
            TypeTag::Double => "Double",
            TypeTag::String => "String",
            TypeTag::Date => "Date",
            TypeTag::Time => "Time",
            TypeTag::Object => "Object",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
