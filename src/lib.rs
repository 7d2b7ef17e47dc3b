#![cfg_attr(not(test), no_std)]

//! ## Slate, a hard-real-time offset allocator
//!
//! Slate carves a linear range `[0, total_size)` into non-overlapping
//! sub-ranges on request and merges them back on release. It manages offsets
//! and sizes only: it never owns or dereferences the memory those offsets
//! describe, which makes it suitable for suballocating GPU heaps, sparse
//! buffers, arenas, and other address spaces the CPU cannot (or should not)
//! touch directly.
//!
//! ### Features:
//! * **O(1)** worst-case allocation and free; no operation ever scans.
//! * **Low external fragmentation** via 256 two-level segregated-fit bins
//!   and eager neighbor coalescing; internal waste is bounded at 12.5% by
//!   the 3-bit-mantissa size rounding.
//! * **Zero heap use**: all metadata lives in one caller-provided buffer
//!   sized by [`Slate::required_bytes`].
//!
//! ### Usage:
//!
//! ```rust
//! use slate::Slate;
//!
//! // room for up to 128 concurrent allocations
//! let mut buffer = vec![0u8; Slate::required_bytes(128)];
//! let mut slate = Slate::new(1 << 20, 128, &mut buffer);
//!
//! let a = slate.allocate(1337).unwrap();
//! assert_eq!(a.offset, 0);
//! // ... offset 0..1337 of the backing resource is yours ...
//! slate.free(a);
//! ```
//!
//! Slate is single-owner and not thread-safe; wrap it in [`Slatck`] (via
//! [`Slate::lock`]) to serialize access behind any [`lock_api`] mutex.

#[cfg(any(test, feature = "error-scanning-std"))]
extern crate std;

mod small_float;
mod slate;

#[cfg(feature = "lock")]
pub mod locking;
#[cfg(feature = "lock")]
mod slatck;

pub use crate::slate::report::{BinReport, StorageReport, StorageReportFull};
pub use crate::slate::{Allocation, Slate};

#[cfg(feature = "lock")]
pub use slatck::Slatck;

#[cfg(feature = "fuzzing")]
pub use small_float::{float_to_uint, uint_to_float_round_down, uint_to_float_round_up};

/// Top-level buckets in the two-level bin index.
pub const NUM_TOP_BINS: usize = 32;
/// Sub-bins per top-level bucket.
pub const BINS_PER_LEAF: usize = 8;
/// Total size bins. Bin indices are the 8-bit pseudo-float codes.
pub const NUM_LEAF_BINS: usize = NUM_TOP_BINS * BINS_PER_LEAF;

pub(crate) const TOP_BINS_INDEX_SHIFT: u32 = 3;
pub(crate) const LEAF_BINS_INDEX_MASK: u32 = 0x7;

/// Allocation failure: either no free span can satisfy the requested size,
/// or the node pool is exhausted (too many live allocations and splits for
/// the configured `max_allocations`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("out of space or allocation slots")
    }
}
