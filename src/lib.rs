//! buildplumb - build-tool plumbing utilities.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          buildplumb                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  string-building call sites (resources/, platform/, callers)    │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          String Cache (cache/)  [thread-local]           │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  slot: Option<String>  — one parked buffer per   │   │   │
//! │  │   │  thread, capacity ≤ MAX_RETAINED_CAPACITY        │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        acquire / release / take_and_release + stats      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌───────────────┐  │
//! │  │   resources/     │ │     fsutil/      │ │   platform/   │  │
//! │  │ two-tier string  │ │ std::fs facade   │ │ pipe names +  │  │
//! │  │ catalog + format │ │ behind a trait   │ │ CPU probe     │  │
//! │  └──────────────────┘ └──────────────────┘ └───────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config constants, Error, Result)
//! - [`cache`] - Thread-local reusable string buffer cache
//! - [`resources`] - Resource-string lookup with primary/shared fallback
//! - [`fsutil`] - File-system facade over `std::fs`
//! - [`platform`] - Pipe naming and processor-architecture probing
//!
//! # Quick Start
//! ```
//! use buildplumb::cache;
//!
//! let mut buf = cache::acquire(64);
//! buf.push_str("obj/debug/app.o");
//! let path = cache::take_and_release(buf);
//! assert_eq!(path, "obj/debug/app.o");
//! ```

// Core modules
pub mod cache;
pub mod common;

// Adapter modules
pub mod fsutil;
pub mod platform;
pub mod resources;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MAX_RETAINED_CAPACITY};
pub use common::{Error, Result};

pub use cache::{acquire, acquire_default, release, take_and_release, StatsSnapshot};
pub use fsutil::{FileSystem, StdFileSystem};
pub use platform::ProcessorArchitecture;
pub use resources::ResourceCatalog;
