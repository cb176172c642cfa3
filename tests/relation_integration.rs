//! # Integration Tests for Relation Construction and Views
//!
//! End-to-end tests through the public API: builder to relation to sorted
//! view, plus the schema algebra and the error kinds callers can observe.
//!
//! ## Test Categories
//!
//! 1. **Construction Tests**: builder accumulation, release, relation
//!    canonicalization
//! 2. **View Tests**: column selection, composite sorting, NaN placement
//! 3. **Schema Algebra Tests**: union/intersect laws over built relations
//! 4. **Rendering Tests**: tabular layout of relations and views
//! 5. **Error Tests**: every observable failure kind

use std::sync::Arc;

use relstore::render::{dump, table_to_string};
use relstore::{
    ArgumentError, NotImplemented, Relation, RelationBuilder, RelationRead, RelationType,
    SchemaError, TableView, TypeTag, Value,
};

const E: f64 = 2.718281828459045;

fn sample_relation() -> Arc<Relation> {
    let mut builder = RelationBuilder::from_names(
        &["Z", "Y", "X"],
        &[TypeTag::Int, TypeTag::Float, TypeTag::Double],
    )
    .unwrap();
    builder
        .push_row(&[Value::Int(2), Value::Float(6.28), Value::Double(5.43)])
        .unwrap();
    builder
        .push_row(&[Value::Int(200), Value::Float(4.5), Value::Double(2.3)])
        .unwrap();
    builder
        .push_row(&[Value::Int(1), Value::Float(3.14), Value::Double(E)])
        .unwrap();
    Arc::new(Relation::new(builder.release()).unwrap())
}

fn read_row(rel: &dyn RelationRead, row: usize) -> Vec<Value> {
    let ops = rel.value_ops();
    (0..rel.columns().len())
        .map(|c| ops[c].read(rel.at(row, c)))
        .collect()
}

#[test]
fn builder_tracks_length_across_pushes() {
    let mut builder =
        RelationBuilder::from_names(&["A", "B"], &[TypeTag::Int, TypeTag::Double]).unwrap();
    assert_eq!(builder.len(), 0);

    for i in 0..10 {
        builder
            .push_row(&[Value::Int(i), Value::Double(f64::from(i) / 2.0)])
            .unwrap();
        assert_eq!(builder.len(), (i + 1) as usize);
    }
    assert_eq!(builder.row(3), [Value::Int(3), Value::Double(1.5)]);
}

#[test]
fn relation_construction_preserves_cells_at_canonical_indices() {
    let rel = sample_relation();

    assert_eq!(rel.ty().to_string(), "{ X : Double, Y : Float, Z : Int }");
    assert_eq!(rel.len(), 3);

    // Insertion order Z, Y, X becomes canonical X, Y, Z; the cell values
    // travel with their columns.
    assert_eq!(
        read_row(&*rel, 0),
        [Value::Double(5.43), Value::Float(6.28), Value::Int(2)]
    );
    assert_eq!(
        read_row(&*rel, 1),
        [Value::Double(2.3), Value::Float(4.5), Value::Int(200)]
    );
    assert_eq!(
        read_row(&*rel, 2),
        [Value::Double(E), Value::Float(3.14), Value::Int(1)]
    );
}

#[test]
fn view_sorted_by_x_orders_the_rows() {
    let rel = sample_relation();
    let view = TableView::new(rel, &["X", "Y", "Z"]).unwrap();

    assert_eq!(view.len(), 3);
    assert_eq!(
        read_row(&view, 0),
        [Value::Double(2.3), Value::Float(4.5), Value::Int(200)]
    );
    assert_eq!(
        read_row(&view, 1),
        [Value::Double(E), Value::Float(3.14), Value::Int(1)]
    );
    assert_eq!(
        read_row(&view, 2),
        [Value::Double(5.43), Value::Float(6.28), Value::Int(2)]
    );
}

#[test]
fn view_with_unknown_column_fails() {
    let rel = sample_relation();
    let err = TableView::new(rel, &["W"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ArgumentError>(),
        Some(&ArgumentError::UnknownColumn {
            name: "W".to_string()
        })
    );
}

#[test]
fn nan_rows_sort_after_every_finite_and_infinite_value() {
    let mut builder = RelationBuilder::from_names(&["V"], &[TypeTag::Double]).unwrap();
    for v in [1.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY, -3.5] {
        builder.push_row(&[Value::Double(v)]).unwrap();
    }
    let rel = Arc::new(Relation::new(builder.release()).unwrap());
    let view = TableView::new(rel, &["V"]).unwrap();

    let decoded: Vec<f64> = (0..view.len())
        .map(|r| match view.value_ops()[0].read(view.at(r, 0)) {
            Value::Double(v) => v,
            other => panic!("expected a double, got {:?}", other),
        })
        .collect();

    assert_eq!(decoded[0], f64::NEG_INFINITY);
    assert_eq!(decoded[1], -3.5);
    assert_eq!(decoded[2], 1.0);
    assert_eq!(decoded[3], f64::INFINITY);
    assert!(decoded[4].is_nan());
}

#[test]
fn schema_algebra_laws_hold_over_built_relations() {
    let a = sample_relation();
    let b = sample_relation();

    let union = RelationType::union_(a.ty(), b.ty()).unwrap();
    assert_eq!(&union, a.ty());

    let both = RelationType::intersect(a.ty(), b.ty()).unwrap();
    assert_eq!(&both, a.ty());

    let empty = RelationType::empty();
    assert_eq!(&RelationType::union_(a.ty(), &empty).unwrap(), a.ty());
    assert_eq!(RelationType::intersect(a.ty(), &empty).unwrap(), empty);
}

#[test]
fn conflicting_column_types_fail_schema_union() {
    let mut one = RelationBuilder::from_names(&["A"], &[TypeTag::Int]).unwrap();
    let mut two = RelationBuilder::from_names(&["A"], &[TypeTag::Double]).unwrap();
    let one = Relation::new(one.release()).unwrap();
    let two = Relation::new(two.release()).unwrap();

    let err = RelationType::union_(one.ty(), two.ty()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SchemaError>(),
        Some(&SchemaError::TypeConflict {
            name: "A".to_string(),
            left: TypeTag::Int,
            right: TypeTag::Double,
        })
    );
}

#[test]
fn projection_and_difference_remain_unimplemented() {
    let rel = sample_relation();
    let err = RelationType::project(rel.ty(), &["X"]).unwrap_err();
    assert!(err.downcast_ref::<NotImplemented>().is_some());
    let err = RelationType::minus(rel.ty(), rel.ty()).unwrap_err();
    assert!(err.downcast_ref::<NotImplemented>().is_some());
}

#[test]
fn sorted_view_renders_as_a_fixed_width_table() {
    let rel = sample_relation();
    let view = TableView::new(rel, &["X", "Y", "Z"]).unwrap();

    let rendered = table_to_string(&view);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);

    // Header, full-width separator, then one line per record sorted by X.
    assert_eq!(lines[0].trim_start(), "X     Y    Z");
    assert!(lines[1].chars().all(|c| c == '-'));
    assert_eq!(lines[1].len(), lines[0].len());
    assert_eq!(lines[2].trim_start(), "2.3   4.5  200");
    assert_eq!(lines[4].trim_start(), "5.43  6.28    2");
}

#[test]
fn dump_labels_builder_and_relation() {
    let mut builder = RelationBuilder::from_names(&["A"], &[TypeTag::Int]).unwrap();
    builder.push_row(&[Value::Int(7)]).unwrap();

    let mut out = String::new();
    dump(&mut out, "builder", &builder).unwrap();
    assert!(out.starts_with("builder { A : Int }\n\n"));

    let rel = Relation::new(builder.release()).unwrap();
    let mut out = String::new();
    dump(&mut out, "relation", &rel).unwrap();
    assert!(out.starts_with("relation { A : Int }\n\n"));
    assert!(out.ends_with("A\n-\n7\n"));
}

#[test]
fn type_mismatch_on_push_reports_the_column() {
    let mut builder =
        RelationBuilder::from_names(&["A", "B"], &[TypeTag::Int, TypeTag::Float]).unwrap();
    let err = builder
        .push_row(&[Value::Int(1), Value::Int(2)])
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ArgumentError>(),
        Some(&ArgumentError::TypeMismatch {
            column: "B".to_string(),
            expected: TypeTag::Float,
            found: TypeTag::Int,
        })
    );
    assert_eq!(builder.len(), 0);
}

#[test]
fn duplicate_names_surface_at_relation_construction() {
    let mut builder =
        RelationBuilder::from_names(&["A", "A"], &[TypeTag::Int, TypeTag::Int]).unwrap();
    builder.push_row(&[Value::Int(1), Value::Int(2)]).unwrap();

    let err = Relation::new(builder.release()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SchemaError>(),
        Some(&SchemaError::DuplicateColumn {
            name: "A".to_string()
        })
    );
}

#[test]
fn bool_columns_build_sort_and_render() {
    let mut builder =
        RelationBuilder::from_names(&["Flag", "N"], &[TypeTag::Bool, TypeTag::Int]).unwrap();
    builder.push_row(&[Value::Bool(true), Value::Int(1)]).unwrap();
    builder.push_row(&[Value::Bool(false), Value::Int(2)]).unwrap();
    let rel = Arc::new(Relation::new(builder.release()).unwrap());

    let view = TableView::new(rel, &["Flag", "N"]).unwrap();
    assert_eq!(read_row(&view, 0), [Value::Bool(false), Value::Int(2)]);
    assert_eq!(read_row(&view, 1), [Value::Bool(true), Value::Int(1)]);

    let rendered = table_to_string(&view);
    assert_eq!(rendered, " Flag  N\n--------\nfalse  2\n true  1\n");
}
