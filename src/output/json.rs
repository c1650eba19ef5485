//! JSON output helpers.

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-print a value as JSON to stdout.
///
/// Listings keep the wire field names (`InstanceId`, `AllocationId`, …), so
/// output is pipeable into tooling that already speaks the API's shapes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — these types contain only strings and integers).
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{rendered}");
    Ok(())
}
