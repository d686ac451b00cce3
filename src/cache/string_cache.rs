//! The thread-local reusable string buffer cache.
//!
//! Each thread has a single slot that can park one `String` between uses.
//! [`acquire`] empties the slot and hands the parked buffer out (length
//! reset, capacity kept) when it is big enough; [`release`] parks a buffer
//! the caller is done with, unless its capacity exceeds
//! [`MAX_RETAINED_CAPACITY`].
//!
//! # Ownership
//! A buffer is owned by exactly one party at a time: the caller between
//! `acquire` and `release`, or the slot while parked. `Cell::take` moves
//! the buffer out of the slot, so the same instance can never be handed
//! out twice.
//!
//! # Thread Safety
//! The slot is `thread_local!`, so there is no shared mutable state and
//! no locking. Buffers must not be moved across threads and released
//! elsewhere; nothing breaks memory-safety-wise if they are, but the
//! receiving thread's slot would retain them, which defeats the cache.
//!
//! # Reentrancy
//! Overlapping acquire/release pairs on one thread are a protocol error:
//! if inner code releases its buffer before outer code does, the outer
//! release silently discards the inner buffer. Debug builds catch the
//! unbalanced release pair with an assertion; release builds keep the
//! last released buffer and drop the earlier one, which is wasteful but
//! harmless.

use std::cell::Cell;

use crate::cache::stats;
use crate::common::config::{DEFAULT_CAPACITY, MAX_RETAINED_CAPACITY};

thread_local! {
    /// The single parked buffer for this thread, if any.
    static SLOT: Cell<Option<String>> = const { Cell::new(None) };
}

#[cfg(debug_assertions)]
thread_local! {
    /// Set by `release`, cleared by `acquire`. Two releases in a row
    /// without an intervening acquire mean an earlier parked buffer was
    /// silently thrown away.
    static RELEASED_SINCE_ACQUIRE: Cell<bool> = const { Cell::new(false) };
}

/// Hand out a buffer with length 0 and capacity ≥ `hint_capacity`.
///
/// Reuses this thread's parked buffer when the hint is within
/// [`MAX_RETAINED_CAPACITY`] and the parked capacity covers it; otherwise
/// allocates fresh. A parked buffer that is too small for the hint stays
/// parked rather than being handed out and regrown piecemeal.
///
/// A hint of 0 maps to [`DEFAULT_CAPACITY`].
///
/// # Example
/// ```
/// use buildplumb::cache;
///
/// let buf = cache::acquire(64);
/// assert_eq!(buf.len(), 0);
/// assert!(buf.capacity() >= 64);
/// cache::release(buf);
/// ```
pub fn acquire(hint_capacity: usize) -> String {
    #[cfg(debug_assertions)]
    RELEASED_SINCE_ACQUIRE.with(|flag| flag.set(false));

    let capacity = if hint_capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        hint_capacity
    };

    if capacity <= MAX_RETAINED_CAPACITY {
        let parked = SLOT.with(|slot| match slot.take() {
            Some(mut buf) if buf.capacity() >= capacity => {
                buf.clear();
                Some(buf)
            }
            // Undersized or empty: leave the slot as it was.
            other => {
                slot.set(other);
                None
            }
        });

        if let Some(buf) = parked {
            stats::record_hit();
            return buf;
        }
    }

    stats::record_miss();
    String::with_capacity(capacity)
}

/// [`acquire`] with the default capacity hint.
pub fn acquire_default() -> String {
    acquire(DEFAULT_CAPACITY)
}

/// Donate a buffer back to this thread's slot.
///
/// Buffers with capacity above [`MAX_RETAINED_CAPACITY`] are dropped
/// instead of parked, so one oversized string cannot pin memory for the
/// rest of the thread's life. Whatever was previously parked is replaced.
///
/// Calling `release` twice without an intervening [`acquire`] is a
/// protocol violation: the first released buffer becomes unreachable
/// through the cache. Debug builds panic; release builds keep the last
/// released buffer.
pub fn release(buffer: String) {
    #[cfg(debug_assertions)]
    RELEASED_SINCE_ACQUIRE.with(|flag| {
        assert!(
            !flag.get(),
            "string cache: release called twice without an intervening acquire"
        );
        flag.set(true);
    });

    if buffer.capacity() <= MAX_RETAINED_CAPACITY {
        stats::record_retained();
        SLOT.with(|slot| slot.set(Some(buffer)));
    } else {
        stats::record_discarded();
    }
}

/// Snapshot the buffer's contents, release the buffer, and return the
/// snapshot.
///
/// The returned `String` is an exact-size copy; the buffer itself (with
/// its larger working capacity) goes back to the slot per [`release`].
///
/// # Example
/// ```
/// use buildplumb::cache;
///
/// let mut buf = cache::acquire(32);
/// buf.push_str("node-4211");
/// assert_eq!(cache::take_and_release(buf), "node-4211");
/// ```
pub fn take_and_release(buffer: String) -> String {
    let snapshot = buffer.clone();
    release(buffer);
    snapshot
}
