//! # Storage Layer
//!
//! Everything textsep remembers between runs goes through the
//! [`KeyValueStore`] trait: a flat map from string keys to string values with
//! `get`, `set` and `remove`. Two backends implement it:
//!
//! - [`fs_backend::FsBackend`]: production, one file per key in the data
//!   directory, written atomically (temp file then rename).
//! - [`mem_backend::MemBackend`]: tests, with an optional simulated write
//!   failure.
//!
//! On top of the raw store sits [`ItemStore`], which owns the item lists and
//! writes the full list back after every mutation. There is no batching and
//! no rollback: if a write fails the in-memory list keeps the change and the
//! error is returned to the caller.
//!
//! ## Keys
//!
//! ```text
//! saved-items          JSON array of ContentItem
//! removed-items        JSON array of ContentItem
//! custom-separator     raw string
//! folders              JSON array of Folder
//! folder-items-<id>    JSON array of ContentItem (user folders)
//! ```
//!
//! ## Malformed data
//!
//! A value that fails to decode is treated as an empty collection. The
//! decode error is kept so the caller can surface it, and the bad value is
//! left on disk until the next write replaces it.

pub mod backend;
pub mod fs_backend;
pub mod item_store;
pub mod mem_backend;
pub mod memory;

pub use backend::KeyValueStore;
pub use item_store::ItemStore;

pub mod keys {
    use crate::model::FolderId;

    pub const SAVED_ITEMS: &str = "saved-items";
    pub const REMOVED_ITEMS: &str = "removed-items";
    pub const CUSTOM_SEPARATOR: &str = "custom-separator";
    pub const FOLDERS: &str = "folders";

    /// Key of the list backing `folder`.
    pub fn list_key(folder: &FolderId) -> String {
        match folder {
            FolderId::Saved => SAVED_ITEMS.to_string(),
            FolderId::Removed => REMOVED_ITEMS.to_string(),
            FolderId::Custom(id) => format!("folder-items-{}", id),
        }
    }
}
