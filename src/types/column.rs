//! Named column types and insertion-ordered column lists.
//!
//! A `ColumnType` pairs a column name with its `TypeTag`. Ordering is by
//! name first, then tag, which is what schema canonicalization sorts by.
//! `ColumnTypeList` keeps whatever order the caller supplied; it is the
//! shape builders and table views carry, never a `Relation` (which holds a
//! canonicalized `RelationType`).

use crate::types::TypeTag;

/// A named, typed column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnType {
    name: String,
    tag: TypeTag,
}

impl ColumnType {
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.name, self.tag)
    }
}

/// Ordered sequence of column types; insertion order preserved.
pub type ColumnTypeList = Vec<ColumnType>;

/// Writes a column-type list as `{ A : Int, B : Float }`.
pub fn write_column_types(
    out: &mut dyn std::fmt::Write,
    cols: &[ColumnType],
) -> std::fmt::Result {
    out.write_str("{ ")?;
    for (i, col) in cols.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", col)?;
    }
    out.write_str(" }")
}

/// Formats a column-type list as a new string.
pub fn column_types_to_string(cols: &[ColumnType]) -> String {
    let mut s = String::new();
    write_column_types(&mut s, cols).expect("formatting into a String");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_order_by_name_then_tag() {
        let a_int = ColumnType::new("A", TypeTag::Int);
        let a_dbl = ColumnType::new("A", TypeTag::Double);
        let b_int = ColumnType::new("B", TypeTag::Int);

        assert!(a_int < b_int);
        assert!(a_dbl < a_int);
        assert_eq!(a_int, ColumnType::new("A", TypeTag::Int));
        assert_ne!(a_int, a_dbl);
    }

    #[test]
    fn column_list_formats_names_and_tags() {
        let cols = vec![
            ColumnType::new("A", TypeTag::Void),
            ColumnType::new("B", TypeTag::Bool),
            ColumnType::new("C", TypeTag::Int),
            ColumnType::new("D", TypeTag::Float),
            ColumnType::new("E", TypeTag::Double),
            ColumnType::new("F", TypeTag::String),
            ColumnType::new("G", TypeTag::Date),
            ColumnType::new("H", TypeTag::Time),
            ColumnType::new("I", TypeTag::Object),
        ];

        let expected = "{ A : Void, B : Bool, C : Int, D : Float, E : Double, \
                        F : String, G : Date, H : Time, I : Object }";
        assert_eq!(column_types_to_string(&cols), expected);
    }
}
