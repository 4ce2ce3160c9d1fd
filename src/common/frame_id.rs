//! Frame identifier type.

use std::fmt;

/// Identifies a frame in the buffer pool.
///
/// Using `usize` because:
/// 1. Frames are stored in `Vec<Frame>`
/// 2. Direct indexing without casting: `frames[frame_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// A `FrameId` on its own says nothing about *what* the frame holds; pair it
/// with a generation in [`PageHandle`](crate::common::PageHandle) when the
/// identity of the resident page matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
