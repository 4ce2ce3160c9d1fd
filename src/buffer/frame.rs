//! Frame - a slot in the buffer pool.
//!
//! A [`Frame`] holds a [`Page`] plus metadata needed for buffer management:
//! - Which page is loaded (if any): the [`PageKey`]
//! - Pin count for reference counting
//! - Dirty flag for write-back tracking
//! - Last-access tick and the generation counter backing stale-handle checks

use std::fmt;
use std::path::PathBuf;

use crate::common::BlockId;
use crate::storage::Page;

/// Identity of a resident page: which block of which file.
///
/// Two distinct resident frames never carry the same key; the buffer
/// manager's page table is keyed by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    /// The owning on-disk file.
    pub file: PathBuf,
    /// Zero-based block offset within that file.
    pub block: BlockId,
}

impl PageKey {
    /// Create a new key.
    pub fn new(file: impl Into<PathBuf>, block: BlockId) -> Self {
        Self {
            file: file.into(),
            block,
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.block.0)
    }
}

/// A frame in the buffer pool.
///
/// Frames are the "slots" in the buffer pool. Each frame can hold one page.
/// The buffer pool has a fixed number of frames allocated at startup and
/// owns all of their memory for the process's lifetime.
///
/// # State machine
/// `Free` → (load) → `Resident·Clean` → (mark dirty) → `Resident·Dirty`
/// → (flush) → `Resident·Clean`; any `Resident·*` frame with a zero pin
/// count → (eviction) → `Free`. `reset()` is the only transition back to
/// `Free` and bumps the generation, invalidating outstanding handles.
///
/// The buffer pool is single-threaded, so all fields are plain values
/// mutated through `&mut Frame`.
pub struct Frame {
    /// The page data.
    page: Page,

    /// Identity of the loaded page, or None if the frame is free.
    key: Option<PageKey>,

    /// Number of active references to this frame. Non-zero means protected
    /// from eviction.
    pin_count: u32,

    /// Whether the page has been modified since loading.
    dirty: bool,

    /// Logical tick of the most recent access. Tracked on every hit;
    /// victim choice is the clock sweep, not recency.
    last_access: u64,

    /// Bumped on every reset; part of every issued handle.
    generation: u64,
}

impl Frame {
    /// Create a new free frame.
    pub fn new() -> Self {
        Self {
            page: Page::new(),
            key: None,
            pin_count: 0,
            dirty: false,
            last_access: 0,
            generation: 0,
        }
    }

    // ========================================================================
    // Page access
    // ========================================================================

    /// Page contents.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.page.as_slice()
    }

    /// Mutable page contents. Does not touch the dirty flag; callers that
    /// write through this must mark the frame dirty themselves.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.page.as_mut_slice()
    }

    /// The whole page, for block I/O.
    #[inline]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The whole page, mutable, for block I/O.
    #[inline]
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    // ========================================================================
    // Identity
    // ========================================================================

    /// Identity of the loaded page, if any.
    #[inline]
    pub fn key(&self) -> Option<&PageKey> {
        self.key.as_ref()
    }

    /// Whether the frame currently holds a valid resident block.
    #[inline]
    pub fn is_resident(&self) -> bool {
        self.key.is_some()
    }

    /// Install a freshly loaded page: resident, clean, pinned once.
    pub fn assign(&mut self, key: PageKey, tick: u64) {
        self.key = Some(key);
        self.pin_count = 1;
        self.dirty = false;
        self.last_access = tick;
    }

    // ========================================================================
    // Pin count operations
    // ========================================================================

    /// Increment the pin count. Returns the new pin count.
    #[inline]
    pub fn pin(&mut self) -> u32 {
        self.pin_count += 1;
        self.pin_count
    }

    /// Decrement the pin count. Returns the new pin count.
    ///
    /// # Panics
    /// Panics if the pin count is already 0; the manager checks for
    /// underflow before calling.
    #[inline]
    pub fn unpin(&mut self) -> u32 {
        assert!(self.pin_count > 0, "pin count underflow");
        self.pin_count -= 1;
        self.pin_count
    }

    /// Get the current pin count.
    #[inline]
    pub fn pin_count(&self) -> u32 {
        self.pin_count
    }

    /// Check if the frame is currently pinned.
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pin_count > 0
    }

    // ========================================================================
    // Dirty flag operations
    // ========================================================================

    /// Mark the frame as dirty (modified). No-op on an already-dirty frame.
    #[inline]
    pub fn mark_dirty(&mut self) {
        debug_assert!(self.is_resident(), "dirty implies resident");
        self.dirty = true;
    }

    /// Clear the dirty flag.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Check if the frame is dirty.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ========================================================================
    // Access time and generation
    // ========================================================================

    /// Record an access at the given logical tick.
    #[inline]
    pub fn touch(&mut self, tick: u64) {
        self.last_access = tick;
    }

    /// Tick of the most recent access.
    #[inline]
    pub fn last_access(&self) -> u64 {
        self.last_access
    }

    /// Current generation. Handles issued against an older generation are
    /// stale.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ========================================================================
    // Frame state queries
    // ========================================================================

    /// Check if the frame can be evicted: resident and unpinned.
    #[inline]
    pub fn is_evictable(&self) -> bool {
        self.is_resident() && !self.is_pinned()
    }

    /// Reset the frame to the free state and bump the generation.
    ///
    /// Called on eviction to prepare the slot for reuse; any handle issued
    /// before the reset stops validating.
    pub fn reset(&mut self) {
        self.page.reset();
        self.key = None;
        self.pin_count = 0;
        self.dirty = false;
        self.generation += 1;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(block: u32) -> PageKey {
        PageKey::new("t.db", BlockId::new(block))
    }

    #[test]
    fn test_frame_new() {
        let frame = Frame::new();
        assert!(!frame.is_resident());
        assert!(!frame.is_pinned());
        assert!(!frame.is_dirty());
        assert_eq!(frame.pin_count(), 0);
        assert_eq!(frame.key(), None);
        assert_eq!(frame.generation(), 0);
    }

    #[test]
    fn test_frame_assign() {
        let mut frame = Frame::new();
        frame.assign(key(7), 3);

        assert!(frame.is_resident());
        assert_eq!(frame.key(), Some(&key(7)));
        assert_eq!(frame.pin_count(), 1);
        assert!(!frame.is_dirty());
        assert_eq!(frame.last_access(), 3);
    }

    #[test]
    fn test_frame_pin_unpin() {
        let mut frame = Frame::new();

        assert_eq!(frame.pin(), 1);
        assert!(frame.is_pinned());

        assert_eq!(frame.pin(), 2);
        assert_eq!(frame.pin_count(), 2);

        assert_eq!(frame.unpin(), 1);
        assert!(frame.is_pinned());

        assert_eq!(frame.unpin(), 0);
        assert!(!frame.is_pinned());
    }

    #[test]
    #[should_panic(expected = "pin count underflow")]
    fn test_frame_unpin_underflow() {
        let mut frame = Frame::new();
        frame.unpin();
    }

    #[test]
    fn test_frame_dirty_flag() {
        let mut frame = Frame::new();
        frame.assign(key(0), 0);
        assert!(!frame.is_dirty());

        frame.mark_dirty();
        assert!(frame.is_dirty());

        // Marking twice is a no-op
        frame.mark_dirty();
        assert!(frame.is_dirty());

        frame.clear_dirty();
        assert!(!frame.is_dirty());
    }

    #[test]
    fn test_frame_evictable() {
        let mut frame = Frame::new();

        // Free frame is not evictable
        assert!(!frame.is_evictable());

        // Load a page: pinned once, still not evictable
        frame.assign(key(1), 0);
        assert!(!frame.is_evictable());

        frame.unpin();
        assert!(frame.is_evictable());

        frame.pin();
        assert!(!frame.is_evictable());
    }

    #[test]
    fn test_frame_reset_bumps_generation() {
        let mut frame = Frame::new();

        frame.assign(key(99), 1);
        frame.mark_dirty();
        frame.data_mut()[100] = 0xFF;
        let gen_before = frame.generation();

        frame.reset();

        assert!(!frame.is_resident());
        assert!(!frame.is_pinned());
        assert!(!frame.is_dirty());
        assert_eq!(frame.data()[100], 0);
        assert_eq!(frame.generation(), gen_before + 1);
    }

    #[test]
    fn test_page_key_display() {
        assert_eq!(format!("{}", key(3)), "t.db:3");
    }

    #[test]
    fn test_page_key_equality() {
        assert_eq!(key(1), key(1));
        assert_ne!(key(1), key(2));
        assert_ne!(key(1), PageKey::new("other.db", BlockId::new(1)));
    }
}
