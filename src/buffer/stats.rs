//! Buffer pool statistics tracking.

use std::fmt;

/// Counters tracked by the buffer pool.
///
/// Plain `u64` fields: the pool is single-threaded, so no atomics are
/// needed and a `stats()` call can hand back a cheap copy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    /// Number of times a page was found resident.
    pub hits: u64,

    /// Number of times a page had to be loaded from disk.
    pub misses: u64,

    /// Number of times a frame was evicted to satisfy a miss.
    pub evictions: u64,

    /// Number of blocks read from disk.
    pub pages_read: u64,

    /// Number of blocks written to disk.
    pub pages_written: u64,
}

impl BufferStats {
    /// Create a stats block with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for BufferStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = BufferStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_hit_rate() {
        let mut stats = BufferStats::new();
        stats.hits = 7;
        stats.misses = 3;
        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = BufferStats::new();
        stats.hits = 100;

        stats.reset();

        assert_eq!(stats.hits, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = BufferStats::new();
        stats.hits = 80;
        stats.misses = 20;
        stats.evictions = 5;

        let display = format!("{}", stats);
        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("80.00%"));
    }
}
