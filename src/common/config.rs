//! Configuration constants for bufpool.

/// Size of a page in bytes (4KB).
///
/// This value is chosen to match:
/// - OS page size on most systems (4096 bytes)
/// - Common database page sizes (PostgreSQL uses 8KB, but 4KB is also standard)
///
/// # Layout
/// Block `k` of a file occupies byte offset `k * PAGE_SIZE`; there is no
/// reserved header block at this layer.
///
/// # Alignment
/// Pages are aligned to 4096 bytes for efficient Direct I/O (O_DIRECT).
pub const PAGE_SIZE: usize = 4096;

/// Default number of frames in a buffer pool.
///
/// 128 frames × 4KB = 512KB of pool memory. Callers with different working
/// sets pass an explicit capacity to `BufferManager::new`.
pub const DEFAULT_POOL_SIZE: usize = 128;

/// Maximum number of blocks a single file can hold with u32 block IDs.
pub const MAX_FILE_BLOCKS: u64 = (u32::MAX as u64) + 1;

/// Maximum theoretical size of a single file in bytes.
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_BLOCKS * PAGE_SIZE as u64;
