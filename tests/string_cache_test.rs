//! String Cache Tests
//!
//! Scenario tests for the acquire/release contract: instance reuse,
//! retention-ceiling behavior, and slot survival across oversized
//! acquires. Each scenario runs on its own thread so the slot starts
//! empty.

use buildplumb::cache;
use buildplumb::{DEFAULT_CAPACITY, MAX_RETAINED_CAPACITY};

/// Run a scenario on a brand-new thread (fresh, empty cache slot).
fn scenario<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    std::thread::spawn(f).join().unwrap();
}

#[test]
fn test_acquire_gives_empty_buffer_with_requested_capacity() {
    scenario(|| {
        for hint in [1, 8, 64, MAX_RETAINED_CAPACITY, MAX_RETAINED_CAPACITY * 4] {
            let buf = cache::acquire(hint);
            assert_eq!(buf.len(), 0);
            assert!(buf.capacity() >= hint);
            drop(buf);
        }
    });
}

#[test]
fn test_zero_hint_maps_to_default_capacity() {
    scenario(|| {
        let buf = cache::acquire(0);
        assert_eq!(buf.len(), 0);
        assert!(buf.capacity() >= DEFAULT_CAPACITY);
    });
}

#[test]
fn test_released_buffer_comes_back_cleared() {
    scenario(|| {
        let mut buf = cache::acquire(40);
        buf.push_str("intermediate contents");
        let ptr = buf.as_ptr();
        let cap = buf.capacity();

        cache::release(buf);

        let again = cache::acquire(40);
        assert_eq!(again.as_ptr(), ptr);
        assert_eq!(again.capacity(), cap);
        assert_eq!(again.len(), 0);
        assert!(again.is_empty());
    });
}

#[test]
fn test_acquire_empties_the_slot() {
    scenario(|| {
        let buf = cache::acquire(32);
        cache::release(buf);

        // Taking the parked buffer must leave the slot empty: a second
        // acquire cannot produce the same instance.
        let first = cache::acquire(8);
        let second = cache::acquire(8);
        assert_ne!(first.as_ptr(), second.as_ptr());
    });
}

#[test]
fn test_grow_shrink_grow_scenario() {
    // The sequence from the retention design: small acquire, reuse on a
    // smaller hint, fresh allocation past the ceiling, and the small
    // buffer still parked at the end.
    scenario(|| {
        let mut buf = cache::acquire(16);
        buf.push_str("0123456789");
        assert!(buf.capacity() >= 16);
        assert!(buf.capacity() <= MAX_RETAINED_CAPACITY);
        let ptr = buf.as_ptr();

        cache::release(buf);

        // Smaller hint: same instance, length reset.
        let again = cache::acquire(8);
        assert_eq!(again.as_ptr(), ptr);
        assert_eq!(again.len(), 0);
        assert!(again.capacity() >= 16);
        cache::release(again);

        // Hint above the ceiling: fresh instance, parked one untouched.
        let big = cache::acquire(10_000);
        assert!(big.capacity() >= 10_000);
        assert_ne!(big.as_ptr(), ptr);

        // An over-ceiling buffer is dropped on release, not parked.
        cache::release(big);

        let small = cache::acquire(8);
        assert_eq!(small.as_ptr(), ptr);
    });
}

#[test]
fn test_release_above_ceiling_never_parks() {
    scenario(|| {
        let mut big = cache::acquire(MAX_RETAINED_CAPACITY + 1);
        big.push_str("too big to keep");
        cache::release(big);

        // Slot is still empty: the next acquire allocates fresh and the
        // result is bounded by its own hint, not by the big buffer.
        let buf = cache::acquire(16);
        assert!(buf.capacity() <= MAX_RETAINED_CAPACITY);

        let snap = cache::stats::snapshot();
        assert_eq!(snap.hits, 0);
        assert_eq!(snap.misses, 2);
        assert_eq!(snap.discarded, 1);
    });
}

#[test]
fn test_growth_past_ceiling_while_in_flight_is_dropped() {
    scenario(|| {
        // Acquired small, but the caller grew it past the ceiling.
        let mut buf = cache::acquire(16);
        for _ in 0..MAX_RETAINED_CAPACITY {
            buf.push_str("xy");
        }
        assert!(buf.capacity() > MAX_RETAINED_CAPACITY);

        cache::release(buf);
        assert_eq!(cache::stats::snapshot().discarded, 1);

        let next = cache::acquire(16);
        assert!(next.capacity() <= MAX_RETAINED_CAPACITY);
    });
}

#[test]
fn test_take_and_release_returns_contents() {
    scenario(|| {
        let mut buf = cache::acquire(64);
        buf.push_str("obj/release/plumb.rlib");
        let ptr = buf.as_ptr();

        let s = cache::take_and_release(buf);
        assert_eq!(s, "obj/release/plumb.rlib");

        // The working buffer was parked; the snapshot is a separate,
        // exact-size allocation.
        assert_ne!(s.as_ptr(), ptr);
        let reused = cache::acquire(8);
        assert_eq!(reused.as_ptr(), ptr);
    });
}

#[test]
fn test_take_and_release_of_oversized_buffer() {
    scenario(|| {
        let mut buf = cache::acquire(MAX_RETAINED_CAPACITY * 2);
        buf.push_str("still returns its contents");

        let s = cache::take_and_release(buf);
        assert_eq!(s, "still returns its contents");

        // Nothing was parked.
        let next = cache::acquire(16);
        assert!(next.capacity() <= MAX_RETAINED_CAPACITY);
    });
}

#[test]
fn test_independent_threads_reuse_only_their_own_buffers() {
    use std::thread;

    let mut handles = vec![];

    for t in 0..8u32 {
        handles.push(thread::spawn(move || {
            // Prime this thread's slot.
            let first = cache::acquire(64);
            let ptr = first.as_ptr() as usize;
            cache::release(first);

            for i in 0..200u32 {
                let mut buf = cache::acquire(64);
                // Every cycle gets the thread's own parked instance back.
                assert_eq!(buf.as_ptr() as usize, ptr);
                assert_eq!(buf.len(), 0);

                buf.push_str("thread ");
                buf.push_str(&t.to_string());
                buf.push_str(" iteration ");
                buf.push_str(&i.to_string());

                let s = cache::take_and_release(buf);
                assert_eq!(s, format!("thread {} iteration {}", t, i));
            }

            let snap = cache::stats::snapshot();
            assert_eq!(snap.misses, 1);
            assert_eq!(snap.hits, 200);
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
