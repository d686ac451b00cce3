//! Pipe-name formatting for node handshakes.
//!
//! Worker nodes listen on a pipe whose name is derived from their process
//! id, so any peer that knows the pid can address them. The name is built
//! through the string cache: this is the canonical short-lived-string
//! call site the cache exists for.

use std::fmt::Write;

use crate::cache;

/// Prefix shared by every node pipe name.
pub const PIPE_NAME_PREFIX: &str = "buildplumb-node-";

/// Format the pipe name for the node hosted by `process_id`.
///
/// # Example
/// ```
/// use buildplumb::platform::node_pipe_name;
///
/// assert_eq!(node_pipe_name(4211), "buildplumb-node-4211");
/// ```
pub fn node_pipe_name(process_id: u32) -> String {
    // A u32 pid is at most 10 decimal digits.
    let mut name = cache::acquire(PIPE_NAME_PREFIX.len() + 10);
    name.push_str(PIPE_NAME_PREFIX);
    // Writing into a String cannot fail.
    let _ = write!(name, "{process_id}");
    cache::take_and_release(name)
}

/// Pipe name for the current process.
pub fn current_node_pipe_name() -> String {
    node_pipe_name(std::process::id())
}
