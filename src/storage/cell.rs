//! Opaque cell handles and byte-stride iteration over erased storage.
//!
//! `CellRef` is the erased layer's element handle: a stride-sized byte
//! window into one element of a column buffer. It deliberately offers no
//! typed dereference; decoding happens inside the concrete
//! `ColumnStorage<T>` wrapper and the per-type value operations.
//!
//! `CellIter` yields `CellRef`s by index and stride. It is double-ended and
//! exact-size, so forward traversal, backward traversal, offset jumps
//! (`nth`) and remaining-length queries all work without ever exposing a
//! typed value.

/// Borrowed, stride-sized handle to one stored element.
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a> {
    bytes: &'a [u8],
}

impl<'a> CellRef<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Size of the referenced element in bytes.
    pub fn stride(&self) -> usize {
        self.bytes.len()
    }

    /// Raw bytes of the element. The concrete type is only known to the
    /// typed wrapper that produced this handle.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Double-ended, exact-size iterator over the cells of one column buffer.
#[derive(Debug, Clone)]
pub struct CellIter<'a> {
    buf: &'a [u8],
    stride: usize,
    front: usize,
    back: usize,
}

impl<'a> CellIter<'a> {
    pub(crate) fn new(buf: &'a [u8], stride: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert_eq!(buf.len() % stride, 0);
        Self {
            buf,
            stride,
            front: 0,
            back: buf.len() / stride,
        }
    }

    fn cell(&self, idx: usize) -> CellRef<'a> {
        let at = idx * self.stride;
        CellRef::new(&self.buf[at..at + self.stride])
    }
}

impl<'a> Iterator for CellIter<'a> {
    type Item = CellRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let cell = self.cell(self.front);
            self.front += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skipped = self.front.saturating_add(n);
        if skipped < self.back {
            self.front = skipped;
            self.next()
        } else {
            self.front = self.back;
            None
        }
    }
}

impl DoubleEndedIterator for CellIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.cell(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for CellIter<'_> {}

impl std::iter::FusedIterator for CellIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf() -> Vec<u8> {
        // Four elements of stride 4.
        (0u8..16).collect()
    }

    #[test]
    fn forward_iteration_visits_each_cell_once() {
        let data = buf();
        let cells: Vec<_> = CellIter::new(&data, 4).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].bytes(), &[0, 1, 2, 3]);
        assert_eq!(cells[3].bytes(), &[12, 13, 14, 15]);
    }

    #[test]
    fn backward_iteration_reverses_order() {
        let data = buf();
        let cells: Vec<_> = CellIter::new(&data, 4).rev().collect();
        assert_eq!(cells[0].bytes(), &[12, 13, 14, 15]);
        assert_eq!(cells[3].bytes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn length_is_exact_and_shrinks_from_both_ends() {
        let data = buf();
        let mut it = CellIter::new(&data, 4);
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
        it.next_back();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn nth_jumps_by_offset() {
        let data = buf();
        let mut it = CellIter::new(&data, 4);
        let cell = it.nth(2).unwrap();
        assert_eq!(cell.bytes(), &[8, 9, 10, 11]);
        assert_eq!(it.len(), 1);
        assert!(it.nth(5).is_none());
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let data: Vec<u8> = Vec::new();
        let mut it = CellIter::new(&data, 8);
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
    }

    #[test]
    fn stride_defines_cell_width() {
        let data = buf();
        let it = CellIter::new(&data, 8);
        let cells: Vec<_> = it.collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].stride(), 8);
        assert_eq!(cells[1].bytes(), &[8, 9, 10, 11, 12, 13, 14, 15]);
    }
}
