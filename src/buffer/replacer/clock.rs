//! Clock replacement policy.
//!
//! The only eviction state this policy keeps is the hand position; pin
//! counts and residency are read straight from the frame pool.

use crate::buffer::Frame;
use crate::common::FrameId;

/// Clock-hand victim selection.
///
/// Sweeps the pool starting at the current hand position, wrapping modulo
/// capacity; the first resident frame with a zero pin count is the victim.
/// After a pick the hand moves past the victim so consecutive misses make
/// forward progress instead of re-examining the same slot first.
///
/// In effect this is round-robin guarded by pins: frames carry a
/// last-access tick, but it does not influence victim choice.
pub struct ClockReplacer {
    /// Next sweep start position.
    hand: usize,
}

impl ClockReplacer {
    /// Create a new replacer with the hand at frame 0.
    pub fn new() -> Self {
        Self { hand: 0 }
    }

    /// Select a victim frame for eviction.
    ///
    /// Returns `None` if one full rotation finds no unpinned resident
    /// frame - every frame is pinned and the caller must report pool
    /// exhaustion rather than wait.
    pub fn evict(&mut self, frames: &[Frame]) -> Option<FrameId> {
        let capacity = frames.len();
        for step in 0..capacity {
            let position = (self.hand + step) % capacity;
            if frames[position].is_evictable() {
                self.hand = (position + 1) % capacity;
                return Some(FrameId::new(position));
            }
        }
        None
    }

    /// Current hand position.
    #[cfg(test)]
    pub fn hand(&self) -> usize {
        self.hand
    }
}

impl Default for ClockReplacer {
    fn default() -> Self {
        Self::new()
    }
}
