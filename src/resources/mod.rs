//! Resource-string lookup with a primary/shared fallback chain.
//!
//! Human-readable strings live in a [`ResourceCatalog`] rather than being
//! scattered through the code. A lookup consults the primary tier first
//! and falls back to the shared tier, so a component can carry its own
//! strings while inheriting the common ones.
//!
//! Formatting a resource template goes through the string cache, which is
//! the intended pattern for every short-lived string this crate builds.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::cache;
use crate::common::{Error, Result};

/// Two-tier store of named resource strings.
///
/// # Thread Safety
/// Both tiers sit behind an `RwLock`: registration happens rarely (at
/// startup), lookups happen from arbitrary threads.
///
/// # Example
/// ```
/// use buildplumb::ResourceCatalog;
///
/// let catalog = ResourceCatalog::new();
/// catalog.register_shared("NodeStarting", "Starting node {0} (pid {1})");
/// let msg = catalog.format("NodeStarting", &["worker", "4211"]).unwrap();
/// assert_eq!(msg, "Starting node worker (pid 4211)");
/// ```
pub struct ResourceCatalog {
    /// Component-specific strings, consulted first.
    primary: RwLock<HashMap<String, String>>,

    /// Strings shared across components, the fallback tier.
    shared: RwLock<HashMap<String, String>>,
}

impl ResourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            primary: RwLock::new(HashMap::new()),
            shared: RwLock::new(HashMap::new()),
        }
    }

    /// Register a string in the primary tier.
    pub fn register(&self, name: &str, value: &str) {
        self.primary
            .write()
            .insert(name.to_string(), value.to_string());
    }

    /// Register a string in the shared (fallback) tier.
    pub fn register_shared(&self, name: &str, value: &str) {
        self.shared
            .write()
            .insert(name.to_string(), value.to_string());
    }

    /// Check whether `name` resolves in either tier.
    pub fn contains(&self, name: &str) -> bool {
        self.primary.read().contains_key(name) || self.shared.read().contains_key(name)
    }

    /// Look up `name`, primary tier first, then shared.
    ///
    /// # Errors
    /// `Error::ResourceNotFound` if neither tier has the string.
    pub fn lookup(&self, name: &str) -> Result<String> {
        if let Some(value) = self.primary.read().get(name) {
            return Ok(value.clone());
        }
        if let Some(value) = self.shared.read().get(name) {
            return Ok(value.clone());
        }
        Err(Error::ResourceNotFound(name.to_string()))
    }

    /// Look up `name` and substitute positional `{N}` placeholders.
    ///
    /// `{{` escapes a literal brace. A `{` that does not open a
    /// well-formed `{N}` placeholder is copied through unchanged.
    ///
    /// # Errors
    /// - `Error::ResourceNotFound` if the template is missing
    /// - `Error::MissingFormatArgument` if the template references an
    ///   index not present in `args`
    pub fn format(&self, name: &str, args: &[&str]) -> Result<String> {
        let template = self.lookup(name)?;

        let arg_len: usize = args.iter().map(|a| a.len()).sum();
        let mut out = cache::acquire(template.len() + arg_len);

        let mut rest = template.as_str();
        loop {
            let Some(pos) = rest.find('{') else {
                out.push_str(rest);
                break;
            };

            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            if let Some(after_escape) = rest.strip_prefix("{{") {
                out.push('{');
                rest = after_escape;
                continue;
            }

            let after = &rest[1..];
            let digits = after
                .bytes()
                .take_while(|b| b.is_ascii_digit())
                .count();

            match after[..digits].parse::<usize>() {
                Ok(index) if after[digits..].starts_with('}') => {
                    let Some(arg) = args.get(index) else {
                        cache::release(out);
                        return Err(Error::MissingFormatArgument {
                            name: name.to_string(),
                            index,
                        });
                    };
                    out.push_str(arg);
                    rest = &after[digits + 1..];
                }
                // No digits, no closing brace, or an absurdly long index:
                // treat the brace as literal text.
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        Ok(cache::take_and_release(out))
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
