//! Storage layer - block-file I/O and the page type.
//!
//! This module handles persistent storage:
//! - [`disk`] - Stateless block-granular file utilities
//! - [`Page`] - The raw 4KB data container

pub mod disk;
mod page;

pub use page::Page;
