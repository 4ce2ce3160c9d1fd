//! Error types for bufpool.

use std::path::PathBuf;

use thiserror::Error;

use crate::common::PageHandle;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in bufpool.
///
/// Every operation in this crate signals failure through this one enum, so
/// callers never have to mix error codes with sentinel return values.
#[derive(Debug, Error)]
pub enum Error {
    /// The named file does not exist on disk.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error from filesystem operations.
    ///
    /// This wraps `std::io::Error` from open/read/write/remove calls.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Every frame in the pool is pinned; no victim can be chosen.
    ///
    /// Reported synchronously — the manager never blocks waiting for an
    /// unpin. The caller must release pages and retry.
    #[error("no evictable frame in buffer pool")]
    PoolExhausted,

    /// The handle does not refer to a currently resident frame.
    ///
    /// Raised when the frame was evicted and reused since the handle was
    /// issued (generation mismatch), or when unpinning a frame whose pin
    /// count is already zero.
    #[error("invalid or stale page handle: {0}")]
    InvalidHandle(PageHandle),

    /// Comparison across incompatible cell types.
    ///
    /// Constructed by the typed-value layer above this crate; it lives here
    /// so the whole engine shares one error vocabulary.
    #[error("operands have incompatible types")]
    TypeMismatch,
}
