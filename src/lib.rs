//! bufpool - a pin-based page buffer pool over block files.
//!
//! This crate is the buffer (page cache) layer of a disk-backed storage
//! engine: it mediates all access between fixed-size on-disk blocks and a
//! bounded in-memory frame pool, implementing clock page replacement,
//! pin-based protection, and dirty write-back.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     collaborators                       │
//! │        (record manager, index manager, tables)          │
//! └───────────────────────────┬─────────────────────────────┘
//!                             ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │              Buffer Pool (buffer/)                      │
//! │   BufferManager + Frame + ClockReplacer + BufferStats   │
//! └───────────────────────────┬─────────────────────────────┘
//!                             ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │              Storage Layer (storage/)                   │
//! │        disk (block-file utilities) + Page               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Collaborators never touch the filesystem directly; all persistence
//! flows through [`BufferManager`] and the [`storage::disk`] utilities.
//!
//! # Modules
//! - [`common`] - Shared primitives (BlockId, FrameId, PageHandle, Error,
//!   config)
//! - [`buffer`] - Buffer pool management and eviction
//! - [`storage`] - Block-file I/O and the page type
//!
//! # Quick Start
//! ```no_run
//! use bufpool::buffer::BufferManager;
//! use bufpool::common::BlockId;
//! use bufpool::storage::disk;
//!
//! disk::create_empty_file("table.db").unwrap();
//!
//! let mut pool = BufferManager::new(64);
//!
//! // Fetch pins the page; fetching past EOF yields a fresh zeroed block.
//! let handle = pool.fetch_page("table.db", BlockId::new(0)).unwrap();
//! pool.page_data_mut(handle).unwrap()[0] = 0xAB;
//!
//! // Write-back, then release the pin.
//! pool.flush_page(handle).unwrap();
//! pool.unpin_page(handle).unwrap();
//! ```

pub mod buffer;
pub mod common;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::PAGE_SIZE;
pub use common::{BlockId, Error, FrameId, PageHandle, Result};

pub use buffer::{BufferManager, BufferStats, Frame, PageKey};
pub use storage::Page;
