//! Per-thread cache statistics tracking.
//!
//! The counters live in thread-local storage like the cache slot itself,
//! so recording is plain `Cell` arithmetic with no atomics. A snapshot
//! describes only the calling thread's cache activity.

use std::cell::Cell;
use std::fmt;

/// Counters recorded by the string cache for the current thread.
struct Counters {
    /// Acquires served from the parked buffer.
    hits: Cell<u64>,

    /// Acquires that had to allocate fresh.
    misses: Cell<u64>,

    /// Releases that parked the buffer.
    retained: Cell<u64>,

    /// Releases that dropped an over-ceiling buffer.
    discarded: Cell<u64>,
}

impl Counters {
    const fn new() -> Self {
        Self {
            hits: Cell::new(0),
            misses: Cell::new(0),
            retained: Cell::new(0),
            discarded: Cell::new(0),
        }
    }
}

thread_local! {
    static COUNTERS: Counters = const { Counters::new() };
}

pub(crate) fn record_hit() {
    COUNTERS.with(|c| c.hits.set(c.hits.get() + 1));
}

pub(crate) fn record_miss() {
    COUNTERS.with(|c| c.misses.set(c.misses.get() + 1));
}

pub(crate) fn record_retained() {
    COUNTERS.with(|c| c.retained.set(c.retained.get() + 1));
}

pub(crate) fn record_discarded() {
    COUNTERS.with(|c| c.discarded.set(c.discarded.get() + 1));
}

/// Get a snapshot of the current thread's cache statistics.
pub fn snapshot() -> StatsSnapshot {
    COUNTERS.with(|c| StatsSnapshot {
        hits: c.hits.get(),
        misses: c.misses.get(),
        retained: c.retained.get(),
        discarded: c.discarded.get(),
    })
}

/// Reset the current thread's counters to zero.
pub fn reset() {
    COUNTERS.with(|c| {
        c.hits.set(0);
        c.misses.set(0);
        c.retained.set(0);
        c.discarded.set(0);
    });
}

/// A point-in-time copy of one thread's cache statistics.
///
/// Safe to print, compare, or carry across threads; it is just numbers.
///
/// # Example
/// ```
/// use buildplumb::cache::{self, stats};
///
/// let buf = cache::acquire(32);
/// cache::release(buf);
/// let snap = stats::snapshot();
/// assert_eq!(snap.retained, snap.hits + snap.misses); // one cycle so far
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub retained: u64,
    pub discarded: u64,
}

impl StatsSnapshot {
    /// Calculate the acquire hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheStats {{ hits: {}, misses: {}, discarded: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.discarded,
            self.hit_rate() * 100.0
        )
    }
}
