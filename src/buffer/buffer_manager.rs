//! Buffer Manager - the core page caching layer.
//!
//! The [`BufferManager`] provides:
//! - Page caching between block files and memory
//! - Pin-based reference counting
//! - Dirty page write-back on eviction and explicit flush
//! - Generation-checked handles that detect use-after-eviction

use std::collections::HashMap;
use std::path::Path;

use crate::buffer::frame::PageKey;
use crate::buffer::replacer::ClockReplacer;
use crate::buffer::{BufferStats, Frame};
use crate::common::config::DEFAULT_POOL_SIZE;
use crate::common::{BlockId, Error, FrameId, PageHandle, Result};
use crate::storage::disk;

/// Manages a pool of buffer frames for caching blocks of on-disk files.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                       BufferManager                         │
/// │  ┌───────────────┐  ┌──────────────────────────────────┐   │
/// │  │  page_table   │  │       frames: Vec<Frame>         │   │
/// │  │ (file,block)  │─▶│  [Frame0] [Frame1] [Frame2] ...  │   │
/// │  │   → FrameId   │  └──────────────────────────────────┘   │
/// │  └───────────────┘                                          │
/// │  ┌──────────────┐  ┌───────────────┐  ┌──────────────┐     │
/// │  │  free_list   │  │   replacer    │  │ storage::disk │     │
/// │  │ Vec<FrameId> │  │ ClockReplacer │  │ (stateless)   │     │
/// │  └──────────────┘  └───────────────┘  └──────────────┘     │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// # Thread Safety
/// None, deliberately: every operation runs to completion on the caller's
/// thread and mutating operations take `&mut self`. Callers that share a
/// manager across threads must serialize access themselves.
///
/// # Handles
/// [`fetch_page`] returns a [`PageHandle`] pinned once. Handles carry the
/// frame's generation; after the frame is evicted and reused, every
/// operation on the old handle fails with [`Error::InvalidHandle`] instead
/// of touching the new occupant.
///
/// # Usage
/// ```no_run
/// use bufpool::buffer::BufferManager;
/// use bufpool::common::BlockId;
/// use bufpool::storage::disk;
///
/// disk::create_empty_file("table.db").unwrap();
///
/// let mut pool = BufferManager::new(16);
/// let handle = pool.fetch_page("table.db", BlockId::new(0)).unwrap();
/// pool.page_data_mut(handle).unwrap()[0] = 0xAB;
/// pool.flush_page(handle).unwrap();
/// pool.unpin_page(handle).unwrap();
/// ```
///
/// [`fetch_page`]: BufferManager::fetch_page
pub struct BufferManager {
    /// Fixed pool of frames allocated at startup, owner of all page memory.
    frames: Vec<Frame>,

    /// Maps resident (file, block) identities to frame IDs.
    page_table: HashMap<PageKey, FrameId>,

    /// Stack of free frame IDs (LIFO for cache locality).
    free_list: Vec<FrameId>,

    /// Eviction policy for selecting victim frames.
    replacer: ClockReplacer,

    /// Performance counters.
    stats: BufferStats,

    /// Logical access clock; bumped on every fetch.
    tick: u64,
}

impl BufferManager {
    /// Create a new buffer manager.
    ///
    /// # Arguments
    /// * `pool_size` - Number of frames in the pool
    ///
    /// # Panics
    /// Panics if `pool_size` is 0.
    pub fn new(pool_size: usize) -> Self {
        assert!(pool_size > 0, "pool_size must be > 0");

        // Allocate all frames upfront
        let frames: Vec<Frame> = (0..pool_size).map(|_| Frame::new()).collect();

        // All frames start on the free list (LIFO order)
        let free_list: Vec<FrameId> = (0..pool_size).map(FrameId::new).collect();

        Self {
            frames,
            page_table: HashMap::new(),
            free_list,
            replacer: ClockReplacer::new(),
            stats: BufferStats::new(),
            tick: 0,
        }
    }

    // ========================================================================
    // Public API: Fetch pages
    // ========================================================================

    /// Fetch the page holding `block` of `file`, pinning it.
    ///
    /// If the page is resident this is a pure in-memory hit: the pin count
    /// goes up, the access tick is refreshed, and no disk I/O happens.
    /// Otherwise a frame is taken from the free list (or a victim is
    /// evicted, write-back first if dirty) and the block is loaded into it.
    ///
    /// Reading a block past the current end of the file yields a zeroed
    /// page; the block materializes on disk when it is flushed.
    ///
    /// The caller owns one pin per successful call and must balance it with
    /// [`unpin_page`](Self::unpin_page).
    ///
    /// # Errors
    /// - `Error::NotFound` if `file` does not exist
    /// - `Error::PoolExhausted` if every frame is pinned
    /// - `Error::Io` if the victim write-back or the load fails
    pub fn fetch_page(&mut self, file: impl AsRef<Path>, block: BlockId) -> Result<PageHandle> {
        let key = PageKey::new(file.as_ref(), block);
        self.tick += 1;
        let tick = self.tick;

        // Hit: pin, touch, done - this path never reaches the disk.
        if let Some(&frame_id) = self.page_table.get(&key) {
            let frame = &mut self.frames[frame_id.0];
            frame.pin();
            frame.touch(tick);
            self.stats.hits += 1;
            return Ok(PageHandle::new(frame_id, frame.generation()));
        }

        // Miss: acquire a frame, then load the block into it.
        self.stats.misses += 1;
        let frame_id = self.acquire_frame()?;

        if let Err(e) = disk::read_block(&key.file, block, self.frames[frame_id.0].page_mut()) {
            // Failed load leaves the pool unchanged: the frame goes back
            // to the free list instead of holding garbage.
            self.free_list.push(frame_id);
            return Err(e);
        }
        self.stats.pages_read += 1;

        let frame = &mut self.frames[frame_id.0];
        frame.assign(key.clone(), tick);
        let handle = PageHandle::new(frame_id, frame.generation());
        self.page_table.insert(key, frame_id);

        Ok(handle)
    }

    /// Find the resident frame for `(file, block)` without pinning it.
    ///
    /// Returns `None` when the page is not resident. The returned handle is
    /// as stale-prone as any other: it stops validating once the frame is
    /// evicted.
    pub fn lookup_page(&self, file: impl AsRef<Path>, block: BlockId) -> Option<PageHandle> {
        let key = PageKey::new(file.as_ref(), block);
        self.page_table
            .get(&key)
            .map(|&frame_id| PageHandle::new(frame_id, self.frames[frame_id.0].generation()))
    }

    // ========================================================================
    // Public API: Page access
    // ========================================================================

    /// Borrow the page contents behind `handle`.
    ///
    /// # Errors
    /// `Error::InvalidHandle` if the frame no longer holds the page the
    /// handle was issued for.
    pub fn page_data(&self, handle: PageHandle) -> Result<&[u8]> {
        Ok(self.frame_for(handle)?.data())
    }

    /// Mutably borrow the page contents behind `handle`, marking the frame
    /// dirty.
    ///
    /// # Errors
    /// `Error::InvalidHandle` if the frame no longer holds the page the
    /// handle was issued for.
    pub fn page_data_mut(&mut self, handle: PageHandle) -> Result<&mut [u8]> {
        let frame = self.frame_for_mut(handle)?;
        frame.mark_dirty();
        Ok(frame.data_mut())
    }

    // ========================================================================
    // Public API: Pin / dirty bookkeeping
    // ========================================================================

    /// Mark the page behind `handle` as modified. No-op on an already-dirty
    /// frame.
    ///
    /// # Errors
    /// `Error::InvalidHandle` if the handle is stale.
    pub fn mark_dirty(&mut self, handle: PageHandle) -> Result<()> {
        self.frame_for_mut(handle)?.mark_dirty();
        Ok(())
    }

    /// Pin the page behind `handle` once more.
    ///
    /// Pinning is reference-counted; each pin needs a matching unpin.
    ///
    /// # Errors
    /// `Error::InvalidHandle` if the handle is stale.
    pub fn pin_page(&mut self, handle: PageHandle) -> Result<()> {
        self.frame_for_mut(handle)?.pin();
        Ok(())
    }

    /// Release one pin on the page behind `handle`.
    ///
    /// # Errors
    /// `Error::InvalidHandle` if the handle is stale, or if the pin count
    /// is already zero - the count never goes negative and the frame is
    /// left unchanged.
    pub fn unpin_page(&mut self, handle: PageHandle) -> Result<()> {
        let frame = self.frame_for_mut(handle)?;
        if !frame.is_pinned() {
            return Err(Error::InvalidHandle(handle));
        }
        frame.unpin();
        Ok(())
    }

    // ========================================================================
    // Public API: Flush
    // ========================================================================

    /// Write the page behind `handle` back to disk if it is dirty.
    ///
    /// A clean frame is a successful no-op.
    ///
    /// # Errors
    /// - `Error::InvalidHandle` if the handle is stale
    /// - `Error::NotFound` if the backing file was removed; the flush never
    ///   recreates it
    /// - `Error::Io` on write failure
    pub fn flush_page(&mut self, handle: PageHandle) -> Result<()> {
        self.frame_for(handle)?;
        self.flush_frame(handle.frame_id)
    }

    /// Write every dirty frame back to disk.
    ///
    /// # Errors
    /// Stops at the first failing write.
    pub fn flush_all(&mut self) -> Result<()> {
        for i in 0..self.frames.len() {
            self.flush_frame(FrameId::new(i))?;
        }
        Ok(())
    }

    // ========================================================================
    // Public API: File operations
    // ========================================================================

    /// Number of whole blocks in `file`: `floor(file_size / PAGE_SIZE)`.
    ///
    /// # Errors
    /// `Error::NotFound` if the file does not exist.
    pub fn block_count(&self, file: impl AsRef<Path>) -> Result<u64> {
        disk::block_count(file)
    }

    /// Delete `file` from disk and free every frame still holding one of
    /// its blocks.
    ///
    /// Freed frames bump their generation, so outstanding handles into the
    /// file fail with `Error::InvalidHandle` afterwards. Dirty content of a
    /// removed file is dropped, not flushed. Removing an absent file is not
    /// an error.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        disk::delete_file(path)?;

        let victims: Vec<(PageKey, FrameId)> = self
            .page_table
            .iter()
            .filter(|(key, _)| key.file.as_path() == path)
            .map(|(key, &frame_id)| (key.clone(), frame_id))
            .collect();

        for (key, frame_id) in victims {
            self.page_table.remove(&key);
            self.frames[frame_id.0].reset();
            self.free_list.push(frame_id);
        }

        Ok(())
    }

    // ========================================================================
    // Public API: Introspection
    // ========================================================================

    /// Get the pool size.
    pub fn pool_size(&self) -> usize {
        self.frames.len()
    }

    /// Get the number of free frames.
    pub fn free_frame_count(&self) -> usize {
        self.free_list.len()
    }

    /// Get the number of resident pages.
    pub fn page_count(&self) -> usize {
        self.page_table.len()
    }

    /// Get a copy of the performance counters.
    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Pin count of the frame behind `handle`.
    pub fn pin_count(&self, handle: PageHandle) -> Result<u32> {
        Ok(self.frame_for(handle)?.pin_count())
    }

    /// Whether the frame behind `handle` is dirty.
    pub fn is_dirty(&self, handle: PageHandle) -> Result<bool> {
        Ok(self.frame_for(handle)?.is_dirty())
    }

    /// Logical tick of the most recent access to the frame behind `handle`.
    pub fn last_access(&self, handle: PageHandle) -> Result<u64> {
        Ok(self.frame_for(handle)?.last_access())
    }

    // ========================================================================
    // Internal: Handle validation
    // ========================================================================

    /// Resolve a handle to its frame, rejecting stale or out-of-range ones.
    fn frame_for(&self, handle: PageHandle) -> Result<&Frame> {
        let frame = self
            .frames
            .get(handle.frame_id.0)
            .ok_or(Error::InvalidHandle(handle))?;
        if !frame.is_resident() || frame.generation() != handle.generation {
            return Err(Error::InvalidHandle(handle));
        }
        Ok(frame)
    }

    /// Mutable variant of [`frame_for`](Self::frame_for).
    fn frame_for_mut(&mut self, handle: PageHandle) -> Result<&mut Frame> {
        let frame = self
            .frames
            .get_mut(handle.frame_id.0)
            .ok_or(Error::InvalidHandle(handle))?;
        if !frame.is_resident() || frame.generation() != handle.generation {
            return Err(Error::InvalidHandle(handle));
        }
        Ok(frame)
    }

    // ========================================================================
    // Internal: Frame allocation and eviction
    // ========================================================================

    /// Get a frame for a miss: free list first, eviction otherwise.
    fn acquire_frame(&mut self) -> Result<FrameId> {
        if let Some(frame_id) = self.free_list.pop() {
            return Ok(frame_id);
        }
        self.evict_frame()
    }

    /// Evict a victim frame and return it, reset and ready for reuse.
    ///
    /// Eviction never silently discards a modified block: a dirty victim is
    /// written back before the reset.
    fn evict_frame(&mut self) -> Result<FrameId> {
        let frame_id = self
            .replacer
            .evict(&self.frames)
            .ok_or(Error::PoolExhausted)?;

        // Write-back step
        self.flush_frame(frame_id)?;

        let key = self.frames[frame_id.0].key().cloned();
        if let Some(key) = key {
            self.page_table.remove(&key);
        }
        self.frames[frame_id.0].reset();
        self.stats.evictions += 1;

        Ok(frame_id)
    }

    /// Flush one frame to disk if it is dirty.
    fn flush_frame(&mut self, frame_id: FrameId) -> Result<()> {
        let frame = &self.frames[frame_id.0];
        if !frame.is_dirty() {
            return Ok(());
        }

        // dirty implies resident, so a dirty frame always has a key
        let Some(key) = frame.key() else {
            debug_assert!(false, "dirty frame without identity");
            return Ok(());
        };
        disk::write_block(&key.file, key.block, frame.page())?;

        self.frames[frame_id.0].clear_dirty();
        self.stats.pages_written += 1;
        Ok(())
    }
}

impl Default for BufferManager {
    /// A manager with [`DEFAULT_POOL_SIZE`] frames.
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

impl Drop for BufferManager {
    /// Write back whatever is still dirty before the pool goes away.
    ///
    /// Errors are swallowed: a failed write-back at teardown has nowhere to
    /// propagate. Callers that care about durability flush explicitly.
    fn drop(&mut self) {
        let _ = self.flush_all();
    }
}
