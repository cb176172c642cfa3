//! # Tabular Text Rendering
//!
//! Renders any `RelationRead` implementor as a fixed-width text table:
//!
//! ```text
//!       X     Y    Z
//! ------------------
//!     2.3   4.5  200
//! 2.71828  3.14    1
//!    5.43  6.28    2
//! ```
//!
//! Each column is as wide as the longer of its header name and its widest
//! formatted cell. Header and cells are right-aligned, columns are
//! separated by two spaces, and a full-width line of `-` separates the
//! header from the rows. A zero-column aggregate renders as nothing.

use std::fmt::Write;

use crate::relation::RelationRead;

/// Writes `rel` as a text table.
pub fn write_table<R: RelationRead + ?Sized>(out: &mut dyn Write, rel: &R) -> std::fmt::Result {
    let cols = rel.columns();
    if cols.is_empty() {
        return Ok(());
    }
    let ops = rel.value_ops();
    let n_rows = rel.len();

    // Format every cell up front; widths need them all anyway.
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(cols.len());
    let mut widths: Vec<usize> = Vec::with_capacity(cols.len());
    for (c, col) in cols.iter().enumerate() {
        let mut column = Vec::with_capacity(n_rows);
        let mut width = col.name().len();
        for r in 0..n_rows {
            let mut text = String::new();
            ops[c].write_cell(rel.at(r, c), &mut text)?;
            width = width.max(text.len());
            column.push(text);
        }
        cells.push(column);
        widths.push(width);
    }

    for (c, col) in cols.iter().enumerate() {
        if c > 0 {
            out.write_str("  ")?;
        }
        write!(out, "{:>width$}", col.name(), width = widths[c])?;
    }
    out.write_str("\n")?;

    let total_width: usize = widths.iter().sum::<usize>() + 2 * (cols.len() - 1);
    for _ in 0..total_width {
        out.write_str("-")?;
    }
    out.write_str("\n")?;

    for r in 0..n_rows {
        for c in 0..cols.len() {
            if c > 0 {
                out.write_str("  ")?;
            }
            write!(out, "{:>width$}", cells[c][r], width = widths[c])?;
        }
        out.write_str("\n")?;
    }
    Ok(())
}

/// Renders `rel` to a new string.
pub fn table_to_string<R: RelationRead + ?Sized>(rel: &R) -> String {
    let mut out = String::new();
    write_table(&mut out, rel).expect("string formatting does not fail");
    out
}

/// Writes a labelled debug dump: the label, the column types, a blank line,
/// then the rendered table.
pub fn dump<R: RelationRead + ?Sized>(
    out: &mut dyn Write,
    label: &str,
    rel: &R,
) -> std::fmt::Result {
    write!(out, "{} ", label)?;
    crate::types::write_column_types(out, rel.columns())?;
    out.write_str("\n\n")?;
    write_table(out, rel)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::relation::{Relation, RelationBuilder, TableView};
    use crate::types::{TypeTag, Value};

    fn sample() -> Arc<Relation> {
        let mut b = RelationBuilder::from_names(
            &["Z", "Y", "X"],
            &[TypeTag::Int, TypeTag::Float, TypeTag::Double],
        )
        .unwrap();
        b.push_row(&[Value::Int(2), Value::Float(6.28), Value::Double(5.43)])
            .unwrap();
        b.push_row(&[Value::Int(200), Value::Float(4.5), Value::Double(2.3)])
            .unwrap();
        b.push_row(&[Value::Int(1), Value::Float(3.14), Value::Double(2.71828)])
            .unwrap();
        Arc::new(Relation::new(b.release()).unwrap())
    }

    #[test]
    fn columns_widen_to_their_largest_cell() {
        let rel = sample();
        let rendered = table_to_string(&*rel);
        assert_eq!(
            rendered,
            "      X     Y    Z\n\
             ------------------\n\
             \u{20}  5.43  6.28    2\n\
             \u{20}   2.3   4.5  200\n\
             2.71828  3.14    1\n"
        );
    }

    #[test]
    fn sorted_view_renders_in_view_order() {
        let view = TableView::new(sample(), &["X", "Y", "Z"]).unwrap();
        let rendered = table_to_string(&view);
        assert_eq!(
            rendered,
            "      X     Y    Z\n\
             ------------------\n\
             \u{20}   2.3   4.5  200\n\
             2.71828  3.14    1\n\
             \u{20}  5.43  6.28    2\n"
        );
    }

    #[test]
    fn header_width_wins_over_narrow_cells() {
        let mut b = RelationBuilder::from_names(&["Count"], &[TypeTag::Int]).unwrap();
        b.push_row(&[Value::Int(7)]).unwrap();
        let rel = Relation::new(b.release()).unwrap();
        assert_eq!(table_to_string(&rel), "Count\n-----\n    7\n");
    }

    #[test]
    fn zero_column_aggregate_renders_as_nothing() {
        let b = RelationBuilder::new();
        assert_eq!(table_to_string(&b), "");
    }

    #[test]
    fn dump_prefixes_the_label_and_schema() {
        let mut b = RelationBuilder::from_names(&["A"], &[TypeTag::Int]).unwrap();
        b.push_row(&[Value::Int(3)]).unwrap();

        let mut out = String::new();
        dump(&mut out, "builder", &b).unwrap();
        assert_eq!(out, "builder { A : Int }\n\nA\n-\n3\n");
    }
}
