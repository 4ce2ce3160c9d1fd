//! Common types and utilities shared across bufpool.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (BlockId, FrameId, PageHandle)

mod block_id;
pub mod config;
pub mod error;
mod frame_id;
mod page_handle;

pub use block_id::BlockId;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_handle::PageHandle;
