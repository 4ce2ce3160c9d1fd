//! Block identifier type.

use std::fmt;

use crate::common::config::PAGE_SIZE;

/// Identifies one fixed-size block within a file.
///
/// Block IDs are zero-based and per-file: `(file name, BlockId)` together
/// name a page, a `BlockId` alone does not. Using `u32` allows 4 billion
/// blocks per file:
/// - 4,294,967,296 blocks × 4KB = 16TB maximum file size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl BlockId {
    /// Create a new BlockId.
    #[inline]
    pub fn new(id: u32) -> Self {
        BlockId(id)
    }

    /// Byte offset of this block within its file.
    ///
    /// Block `k` occupies bytes `[k * PAGE_SIZE, (k + 1) * PAGE_SIZE)`.
    #[inline]
    pub fn byte_offset(self) -> u64 {
        self.0 as u64 * PAGE_SIZE as u64
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.0)
    }
}
