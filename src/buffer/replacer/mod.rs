//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`ClockReplacer`] - Sweep from the current hand, first unpinned
//!   resident frame wins

mod clock;

pub use clock::ClockReplacer;
