//! Environment variable helpers for jobcost.
//!
//! Every helper takes a lookup function instead of reading the process
//! environment directly, so configuration can be loaded from a fixed map in
//! tests. [`process_env`] is the lookup used in production.

use jobcost_error::ConfigError;
use std::env;
use std::str::FromStr;

/// Reads a variable from the process environment.
///
/// Non-unicode values are treated as unset.
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Returns the value of a required variable.
///
/// Missing and blank (empty or whitespace-only) values are both errors.
pub fn require<F>(lookup: F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Err(ConfigError::missing(name)),
        Some(v) if v.trim().is_empty() => Err(ConfigError::empty(name)),
        Some(v) => Ok(v),
    }
}

/// Returns the value of an optional variable. Blank counts as unset.
pub fn optional<F>(lookup: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.trim().is_empty())
}

/// Parses an optional variable.
///
/// Unset or blank gives `Ok(None)`; a value that fails to parse is an error.
pub fn parse_optional<T, F>(lookup: F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::invalid(name, format!("{raw:?}: {e}"))),
    }
}
