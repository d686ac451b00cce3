//! Thread-local string buffer caching.
//!
//! Incrementally building a short string normally costs one heap
//! allocation per string. The cache lets each thread recycle a single
//! buffer across builds instead: take it with [`acquire`], fill it, and
//! hand it back with [`release`] (or snapshot-and-return in one step with
//! [`take_and_release`]).
//!
//! # Components
//! - [`acquire`] / [`release`] / [`take_and_release`] - The cache operations
//! - [`stats`] - Per-thread usage statistics
//!
//! Each thread owns its own cache slot, so there is no locking anywhere
//! on this path.

pub mod stats;
mod string_cache;

pub use stats::StatsSnapshot;
pub use string_cache::{acquire, acquire_default, release, take_and_release};
