//! Erased and typed column storage.
//!
//! `ColumnStore` is the type-erased interface the builder, relation and
//! view work through: lengths, opaque cell access, growth, appends and bulk
//! transfer, all in terms of the element stride in bytes. `ColumnStorage<T>`
//! is the one concrete implementation, a thin typed wrapper over an
//! arena-backed `RawBuf` that decodes cells with zerocopy conversions.
//!
//! Bulk transfer stays on the typed side: the erased `copy_from` and
//! `move_from` only check strides and bounds, and the concrete wrapper owns
//! the element copy. Byte copy is exact for the plain-data element set;
//! element types with richer move semantics would override it here.

use std::marker::PhantomData;
use std::ops::Range;
use std::sync::Arc;

use eyre::{ensure, Result};
use zerocopy::{FromBytes, IntoBytes};

use crate::storage::{CellIter, CellRef, ColumnArena, Element, RawBuf};
use crate::types::Value;

/// Type-erased interface over one monotyped column buffer.
pub trait ColumnStore {
    /// Element size in bytes.
    fn stride(&self) -> usize;

    /// Number of stored elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Opaque handle to the element at `idx`. Panics if `idx` is out of
    /// bounds; an invalid index is a caller bug, never a silent misread.
    fn cell(&self, idx: usize) -> CellRef<'_>;

    /// Double-ended, exact-size iterator over all cells.
    fn cells(&self) -> CellIter<'_>;

    /// Grows capacity to hold at least `n` elements. The logical length is
    /// unchanged.
    fn reserve(&mut self, n: usize);

    /// Sets the logical length to `n` elements, zero-filling any new ones.
    /// All element types in the core are zero-valid.
    fn resize(&mut self, n: usize);

    /// Appends one element from its raw bytes. The cell width must equal
    /// this column's stride.
    fn push_cell(&mut self, cell: CellRef<'_>) -> Result<()>;

    /// Appends one element from a runtime value. The value's variant must
    /// match this column's element type.
    fn push_value(&mut self, value: &Value) -> Result<()>;

    /// Copies the elements of `src[range]` over `self[dst..dst + range.len()]`.
    /// Both storages must share a stride, and both ranges must be in bounds.
    fn copy_from(&mut self, src: &dyn ColumnStore, range: Range<usize>, dst: usize) -> Result<()>;

    /// Moves the elements of `src[range]` over `self[dst..dst + range.len()]`.
    /// For the plain-data element set a move is a copy; `src` keeps its
    /// length and its bytes.
    fn move_from(
        &mut self,
        src: &mut dyn ColumnStore,
        range: Range<usize>,
        dst: usize,
    ) -> Result<()>;
}

/// Arena-backed storage for elements of one concrete type.
#[derive(Debug)]
pub struct ColumnStorage<T: Element> {
    buf: RawBuf,
    _elem: PhantomData<T>,
}

impl<T: Element> ColumnStorage<T> {
    pub fn new(arena: Arc<ColumnArena>) -> Self {
        Self {
            buf: RawBuf::new(arena, std::mem::align_of::<T>()),
            _elem: PhantomData,
        }
    }

    /// Typed append.
    pub fn push(&mut self, value: T) {
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Typed read of the element at `idx`. Panics if out of bounds.
    pub fn get(&self, idx: usize) -> T {
        decode(self.cell(idx).bytes())
    }
}

/// Decodes one stride-sized byte window into its element value.
pub(crate) fn decode<T: Element>(bytes: &[u8]) -> T {
    T::read_from_bytes(bytes).expect("cell width equals element stride")
}

impl<T: Element> ColumnStore for ColumnStorage<T> {
    fn stride(&self) -> usize {
        std::mem::size_of::<T>()
    }

    fn len(&self) -> usize {
        self.buf.len() / std::mem::size_of::<T>()
    }

    fn cell(&self, idx: usize) -> CellRef<'_> {
        let stride = self.stride();
        let at = idx * stride;
        CellRef::new(&self.buf.as_slice()[at..at + stride])
    }

    fn cells(&self) -> CellIter<'_> {
        CellIter::new(self.buf.as_slice(), self.stride())
    }

    fn reserve(&mut self, n: usize) {
        self.buf.reserve(n * self.stride());
    }

    fn resize(&mut self, n: usize) {
        self.buf.resize_zeroed(n * self.stride());
    }

    fn push_cell(&mut self, cell: CellRef<'_>) -> Result<()> {
        ensure!(
            cell.stride() == self.stride(),
            "cell width {} does not match column stride {}",
            cell.stride(),
            self.stride()
        );
        self.buf.extend_from_slice(cell.bytes());
        Ok(())
    }

    fn push_value(&mut self, value: &Value) -> Result<()> {
        match T::from_value(value) {
            Some(elem) => {
                self.push(elem);
                Ok(())
            }
            None => eyre::bail!(
                "column stores {} but was given a {} value",
                T::TAG,
                value.tag()
            ),
        }
    }

    fn copy_from(&mut self, src: &dyn ColumnStore, range: Range<usize>, dst: usize) -> Result<()> {
        let stride = self.stride();
        ensure!(
            src.stride() == stride,
            "source stride {} does not match destination stride {}",
            src.stride(),
            stride
        );
        ensure!(
            range.end <= src.len() && range.start <= range.end,
            "source range {}..{} out of bounds for length {}",
            range.start,
            range.end,
            src.len()
        );
        let count = range.end - range.start;
        ensure!(
            dst + count <= self.len(),
            "destination range {}..{} out of bounds for length {}",
            dst,
            dst + count,
            self.len()
        );

        let out = self.buf.as_mut_slice();
        for (i, src_idx) in range.enumerate() {
            let at = (dst + i) * stride;
            out[at..at + stride].copy_from_slice(src.cell(src_idx).bytes());
        }
        Ok(())
    }

    fn move_from(
        &mut self,
        src: &mut dyn ColumnStore,
        range: Range<usize>,
        dst: usize,
    ) -> Result<()> {
        // Plain-data elements move by copying.
        self.copy_from(src, range, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::BoolByte;

    fn int_column(values: &[i32]) -> ColumnStorage<i32> {
        let mut col = ColumnStorage::new(Arc::new(ColumnArena::new()));
        for &v in values {
            col.push(v);
        }
        col
    }

    #[test]
    fn typed_push_and_get_round_trip() {
        let col = int_column(&[3, -7, 42]);
        assert_eq!(col.len(), 3);
        assert_eq!(col.get(0), 3);
        assert_eq!(col.get(1), -7);
        assert_eq!(col.get(2), 42);
    }

    #[test]
    fn stride_matches_element_size() {
        assert_eq!(int_column(&[]).stride(), 4);
        let doubles: ColumnStorage<f64> = ColumnStorage::new(Arc::new(ColumnArena::new()));
        assert_eq!(doubles.stride(), 8);
        let bools: ColumnStorage<BoolByte> = ColumnStorage::new(Arc::new(ColumnArena::new()));
        assert_eq!(bools.stride(), 1);
    }

    #[test]
    fn erased_cells_decode_back_to_elements() {
        let col = int_column(&[10, 20, 30]);
        let decoded: Vec<i32> = col.cells().map(|c| decode(c.bytes())).collect();
        assert_eq!(decoded, [10, 20, 30]);

        let reversed: Vec<i32> = col.cells().rev().map(|c| decode(c.bytes())).collect();
        assert_eq!(reversed, [30, 20, 10]);
    }

    #[test]
    fn push_cell_checks_the_stride() {
        let src = int_column(&[5]);
        let mut dst = int_column(&[]);
        dst.push_cell(src.cell(0)).unwrap();
        assert_eq!(dst.get(0), 5);

        let mut doubles: ColumnStorage<f64> = ColumnStorage::new(Arc::new(ColumnArena::new()));
        assert!(doubles.push_cell(src.cell(0)).is_err());
    }

    #[test]
    fn push_value_checks_the_variant() {
        let mut col = int_column(&[]);
        col.push_value(&Value::Int(9)).unwrap();
        assert_eq!(col.get(0), 9);
        assert!(col.push_value(&Value::Double(1.0)).is_err());
    }

    #[test]
    fn resize_zero_fills_and_truncates() {
        let mut col = int_column(&[1, 2]);
        col.resize(4);
        assert_eq!(col.len(), 4);
        assert_eq!(col.get(2), 0);
        assert_eq!(col.get(3), 0);

        col.resize(1);
        assert_eq!(col.len(), 1);
        assert_eq!(col.get(0), 1);
    }

    #[test]
    fn reserve_leaves_length_unchanged() {
        let mut col = int_column(&[1]);
        col.reserve(100);
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn copy_from_transfers_a_range() {
        let src = int_column(&[10, 20, 30, 40]);
        let mut dst = int_column(&[]);
        dst.resize(3);
        dst.copy_from(&src, 1..4, 0).unwrap();
        assert_eq!(dst.get(0), 20);
        assert_eq!(dst.get(1), 30);
        assert_eq!(dst.get(2), 40);
    }

    #[test]
    fn copy_from_rejects_stride_and_bounds_violations() {
        let src = int_column(&[1, 2]);
        let mut dst = int_column(&[]);
        dst.resize(1);
        assert!(dst.copy_from(&src, 0..2, 0).is_err());
        assert!(dst.copy_from(&src, 1..3, 0).is_err());

        let mut doubles: ColumnStorage<f64> = ColumnStorage::new(Arc::new(ColumnArena::new()));
        doubles.resize(2);
        assert!(doubles.copy_from(&src, 0..1, 0).is_err());
    }

    #[test]
    fn move_from_copies_plain_data() {
        let mut src = int_column(&[7, 8]);
        let mut dst = int_column(&[]);
        dst.resize(2);
        dst.move_from(&mut src, 0..2, 0).unwrap();
        assert_eq!(dst.get(0), 7);
        assert_eq!(dst.get(1), 8);
        assert_eq!(src.len(), 2);
    }
}
