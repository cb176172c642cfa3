//! # Column Storage Layer
//!
//! Arena-backed, monotyped column buffers behind a byte-stride, type-erased
//! access interface.
//!
//! ## Storage Layout
//!
//! ```text
//! +--------------------- ColumnArena (bumpalo) ---------------------+
//! |                                                                 |
//! |  +-- RawBuf ---------------------------------+                  |
//! |  | elem 0 | elem 1 | elem 2 | ... | elem n-1 |   (stride bytes  |
//! |  +-------------------------------------------+    per element)  |
//! |                                                                 |
//! |  earlier, outgrown blocks stay in the arena until it drops      |
//! +-----------------------------------------------------------------+
//! ```
//!
//! Every column owns exactly one arena, shared by `Arc` between the buffer
//! and whatever aggregate (builder or relation) holds the column. Growth
//! allocates a larger block from the same arena and copies; superseded
//! blocks are reclaimed collectively when the last holder drops the arena.
//!
//! ## Type Erasure
//!
//! The erased layer never dereferences a typed value:
//!
//! - `CellRef` is a stride-sized byte handle into one element
//! - `CellIter` walks elements by index and stride, forward and backward
//! - `ColumnStore` is the erased interface (length, cell access, reserve,
//!   resize, push, bulk copy/move)
//!
//! Only the concrete `ColumnStorage<T>` wrapper decodes bytes back into
//! element values, via zerocopy conversions.

mod arena;
mod cell;
mod column;
mod element;

pub use arena::{ColumnArena, RawBuf};
pub use cell::{CellIter, CellRef};
pub(crate) use column::decode;
pub use column::{ColumnStorage, ColumnStore};
pub use element::{BoolByte, Element};
