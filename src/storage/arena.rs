//! # Per-Column Arena and Raw Buffer
//!
//! Each column's storage lives in its own `ColumnArena`, a thin wrapper
//! around `bumpalo::Bump`. One arena per column keeps a column's elements
//! contiguous and local, and releases all of its blocks at once when the
//! last holder drops the `Arc<ColumnArena>`.
//!
//! `RawBuf` is the growable byte buffer a column storage is built on. It
//! behaves like a `Vec<u8>` whose backing memory comes from the arena:
//! geometric growth allocates a fresh block and copies the live bytes over;
//! the outgrown block stays in the arena (bump allocation is monotonic) and
//! is reclaimed with everything else when the arena drops.
//!
//! ## Safety
//!
//! `RawBuf` is the one place in the storage layer that touches raw
//! pointers. Its invariants:
//!
//! - `ptr` points to `cap` bytes allocated from `arena` (or dangles while
//!   `cap == 0`, in which case it is never read)
//! - `len <= cap` at all times
//! - the `Arc<ColumnArena>` field keeps the backing memory alive for as
//!   long as the buffer exists
//!
//! Everything above this module works with length-checked `&[u8]` slices.

use std::alloc::Layout;
use std::ptr::NonNull;
use std::sync::Arc;

use bumpalo::Bump;

const MIN_CAPACITY: usize = 64;

/// Dedicated bump arena backing exactly one column's storage.
pub struct ColumnArena {
    bump: Bump,
}

impl ColumnArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Total bytes currently allocated from this arena, including blocks
    /// superseded by buffer growth.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    fn alloc(&self, layout: Layout) -> NonNull<u8> {
        self.bump.alloc_layout(layout)
    }
}

impl Default for ColumnArena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ColumnArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnArena")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}

/// Growable byte buffer backed by a shared column arena.
pub struct RawBuf {
    arena: Arc<ColumnArena>,
    ptr: NonNull<u8>,
    len: usize,
    cap: usize,
    align: usize,
}

impl RawBuf {
    /// Creates an empty buffer bound to `arena`. `align` is the element
    /// alignment every backing block will satisfy; it must be a power of
    /// two.
    pub fn new(arena: Arc<ColumnArena>, align: usize) -> Self {
        debug_assert!(align.is_power_of_two());
        Self {
            arena,
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            align,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn arena(&self) -> &Arc<ColumnArena> {
        &self.arena
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr is valid for cap >= len bytes whenever len > 0, and
        // byte slices have alignment 1.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: same invariants as as_slice, plus exclusive access
        // through &mut self.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Ensures capacity for at least `total` bytes. Never shrinks and never
    /// changes the logical length.
    pub fn reserve(&mut self, total: usize) {
        if total > self.cap {
            self.grow(total);
        }
    }

    /// Sets the logical length to `new_len` bytes, zero-filling any newly
    /// exposed bytes. Shrinking just truncates; the capacity is retained.
    pub fn resize_zeroed(&mut self, new_len: usize) {
        if new_len > self.len {
            self.reserve(new_len);
            // SAFETY: reserve guarantees cap >= new_len; the gap
            // [len, new_len) is within the allocation.
            unsafe {
                self.ptr
                    .as_ptr()
                    .add(self.len)
                    .write_bytes(0, new_len - self.len);
            }
        }
        self.len = new_len;
    }

    /// Appends `bytes`, growing as needed.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let new_len = self.len + bytes.len();
        self.reserve(new_len);
        // SAFETY: cap >= new_len after reserve; source and destination
        // cannot overlap because `bytes` borrows immutably while `self` is
        // borrowed mutably.
        unsafe {
            std::ptr::copy_nonoverlapping(
                bytes.as_ptr(),
                self.ptr.as_ptr().add(self.len),
                bytes.len(),
            );
        }
        self.len = new_len;
    }

    fn grow(&mut self, min_cap: usize) {
        let new_cap = min_cap.max(self.cap * 2).max(MIN_CAPACITY);
        let layout = Layout::from_size_align(new_cap, self.align)
            .expect("column buffer layout overflows");
        let new_ptr = self.arena.alloc(layout);
        if self.len > 0 {
            // SAFETY: old and new blocks are distinct arena allocations;
            // both are valid for len bytes.
            unsafe {
                std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            }
        }
        // The old block stays allocated in the arena until the arena drops.
        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl std::fmt::Debug for RawBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBuf")
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("align", &self.align)
            .finish()
    }
}
