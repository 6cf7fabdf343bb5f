//! Generator warnings with colored terminal output.
//!
//! Provides deduplication so repeated lenient-input fallbacks are reported
//! once. Warnings never go to stdout, which carries the image stream.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set, ignoring poisoning.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```
/// use huebands_common::warning::warn_once;
///
/// warn_once("args", "ignored trailing characters in width '12px'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[huebands {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
