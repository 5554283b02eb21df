//! Values the user changes at runtime and expects to find again next time.
//! These live in the key-value store next to the item lists, unlike
//! [`crate::config`], which is a file the user edits.

use crate::detect::DEFAULT_SEPARATOR;
use crate::error::Result;
use crate::store::{keys, KeyValueStore};

/// The custom separator, falling back to `<_>` when unset or empty.
pub fn custom_separator<S: KeyValueStore>(kv: &S) -> Result<String> {
    Ok(kv
        .get(keys::CUSTOM_SEPARATOR)?
        .filter(|sep| !sep.is_empty())
        .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()))
}

/// Persists `separator` verbatim. An empty value clears the setting.
pub fn set_custom_separator<S: KeyValueStore>(kv: &S, separator: &str) -> Result<()> {
    if separator.is_empty() {
        kv.remove(keys::CUSTOM_SEPARATOR)
    } else {
        kv.set(keys::CUSTOM_SEPARATOR, separator)
    }
}
