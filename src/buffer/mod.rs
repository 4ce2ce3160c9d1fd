//! Buffer pool management.
//!
//! The buffer pool is the in-memory cache layer between storage consumers
//! and disk. It manages a fixed pool of frames, each holding one page.
//!
//! # Components
//! - [`BufferManager`] - The main page cache and sole entry point
//! - [`Frame`] - A slot in the buffer pool holding a page + metadata
//! - [`PageKey`] - The (file, block) identity of a resident page
//! - [`BufferStats`] - Performance counters
//! - [`replacer`] - Eviction policy implementations

mod buffer_manager;
pub mod frame;
pub mod replacer;
mod stats;

pub use buffer_manager::BufferManager;
pub use frame::{Frame, PageKey};
pub use stats::BufferStats;
