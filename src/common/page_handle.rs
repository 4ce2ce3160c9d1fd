//! Generation-checked page handle.

use std::fmt;

use crate::common::FrameId;

/// A handle to a resident page: frame index plus the frame's generation at
/// the time the handle was issued.
///
/// A frame's generation is bumped every time the frame is evicted and
/// reset, so a handle is valid only while its frame keeps holding the same
/// `(file, block)` identity. Every [`BufferManager`] operation that takes a
/// handle re-checks the generation and fails with
/// [`Error::InvalidHandle`] on mismatch — a stale handle is an error, never
/// a silent read of whatever page reused the frame.
///
/// `PageHandle` is `Copy`: it is a ticket, not an owning reference, and
/// holding one does not pin the page.
///
/// [`BufferManager`]: crate::buffer::BufferManager
/// [`Error::InvalidHandle`]: crate::common::Error::InvalidHandle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle {
    /// Index of the frame this handle refers to.
    pub frame_id: FrameId,
    /// Frame generation observed when the handle was issued.
    pub generation: u64,
}

impl PageHandle {
    /// Create a new handle.
    #[inline]
    pub fn new(frame_id: FrameId, generation: u64) -> Self {
        Self {
            frame_id,
            generation,
        }
    }
}

impl fmt::Display for PageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(frame={}, gen={})", self.frame_id.0, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_new() {
        let h = PageHandle::new(FrameId::new(3), 7);
        assert_eq!(h.frame_id, FrameId::new(3));
        assert_eq!(h.generation, 7);
    }

    #[test]
    fn test_handle_equality() {
        let a = PageHandle::new(FrameId::new(1), 0);
        let b = PageHandle::new(FrameId::new(1), 0);
        let c = PageHandle::new(FrameId::new(1), 1);
        assert_eq!(a, b);
        // Same frame, different generation: different identity
        assert_ne!(a, c);
    }

    #[test]
    fn test_handle_display() {
        let h = PageHandle::new(FrameId::new(2), 9);
        assert_eq!(format!("{}", h), "Handle(frame=2, gen=9)");
    }
}
