//! Configuration constants for buildplumb.

/// Maximum capacity (in bytes) at which a released buffer is parked for
/// reuse.
///
/// Buffers above this ceiling are dropped on release instead of retained,
/// which bounds the memory a thread can hold onto after building one
/// unusually large string.
///
/// # Why 512?
/// The strings assembled through the cache are overwhelmingly short:
/// file paths, pipe names, formatted resource messages. 512 bytes covers
/// a Windows `MAX_PATH`-sized path (260) with room for prefixes and
/// decoration, while keeping the worst-case retained memory per thread
/// trivial.
pub const MAX_RETAINED_CAPACITY: usize = 512;

/// Starting capacity used when a caller passes no hint (or a hint of 0).
///
/// Matches the typical growable-string default; small enough that a
/// hint-less acquire never wastes meaningful memory, large enough to
/// hold short identifiers without regrowth.
pub const DEFAULT_CAPACITY: usize = 16;
