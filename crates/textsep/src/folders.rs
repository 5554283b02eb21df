//! # Folder Registry
//!
//! Keeps the ordered list of folders the user sees. Two folders always exist:
//! `saved` and `removed`, tied to the built-in item lists. Folders created by
//! the user get a timestamp-derived id and their own item list.
//!
//! Counts are derived. [`FolderRegistry::refresh_counts`] re-reads the length
//! of each persisted list; the API calls it after every mutation, so there is
//! no polling and no window where a count is stale.

use crate::error::{Result, TextsepError};
use crate::model::{Folder, FolderId};
use crate::store::item_store::persisted_count;
use crate::store::{keys, KeyValueStore};
use chrono::Utc;

pub const SAVED_LABEL: &str = "Saved Items";
pub const SAVED_ICON: &str = "💾";
pub const REMOVED_LABEL: &str = "Removed Items";
pub const REMOVED_ICON: &str = "🗑️";
pub const FOLDER_ICON: &str = "📁";

fn builtin_folders() -> Vec<Folder> {
    vec![
        Folder::new(FolderId::Saved, SAVED_LABEL, SAVED_ICON),
        Folder::new(FolderId::Removed, REMOVED_LABEL, REMOVED_ICON),
    ]
}

pub struct FolderRegistry<S: KeyValueStore> {
    kv: S,
    folders: Vec<Folder>,
    recovered: Vec<TextsepError>,
}

impl<S: KeyValueStore> FolderRegistry<S> {
    pub fn open(kv: S) -> Result<Self> {
        let mut recovered = Vec::new();
        let mut folders: Vec<Folder> = match kv.get(keys::FOLDERS)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(folders) => folders,
                Err(source) => {
                    tracing::warn!(error = %source, "stored folder list is malformed, using defaults");
                    recovered.push(TextsepError::StorageDecode {
                        key: keys::FOLDERS.to_string(),
                        source,
                    });
                    Vec::new()
                }
            },
        };

        // Built-ins always lead, whatever the stored order says.
        let mut ordered = builtin_folders();
        for builtin in &mut ordered {
            if let Some(pos) = folders.iter().position(|f| f.id == builtin.id) {
                let stored = folders.remove(pos);
                builtin.label = stored.label;
                builtin.count = stored.count;
            }
        }
        ordered.extend(folders);

        Ok(Self {
            kv,
            folders: ordered,
            recovered,
        })
    }

    pub fn take_recovered_errors(&mut self) -> Vec<TextsepError> {
        std::mem::take(&mut self.recovered)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn get(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FolderId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of the user-created folders, in display order.
    pub fn custom_ids(&self) -> impl Iterator<Item = &FolderId> {
        self.folders
            .iter()
            .map(|f| &f.id)
            .filter(|id| !id.is_builtin())
    }

    fn persist(&self) -> Result<()> {
        let encoded = serde_json::to_string(&self.folders)?;
        self.kv.set(keys::FOLDERS, &encoded)
    }

    fn next_id(&self) -> FolderId {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let candidate = FolderId::Custom(stamp.to_string());
            if !self.contains(&candidate) {
                return candidate;
            }
            stamp += 1;
        }
    }

    /// Adds a user folder with the standard icon and an empty count.
    pub fn create(&mut self, label: &str) -> Result<Folder> {
        let label = label.trim();
        if label.is_empty() {
            return Err(TextsepError::Validation(
                "Folder name cannot be empty".to_string(),
            ));
        }

        let folder = Folder::new(self.next_id(), label, FOLDER_ICON);
        self.folders.push(folder.clone());
        self.persist()?;
        Ok(folder)
    }

    /// Changes a folder's label. A blank label leaves it unchanged and
    /// returns `Ok(false)`.
    pub fn rename(&mut self, id: &FolderId, new_label: &str) -> Result<bool> {
        let label = new_label.trim();
        if label.is_empty() {
            return Ok(false);
        }
        let folder = self
            .folders
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| TextsepError::FolderNotFound(id.to_string()))?;
        folder.label = label.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Re-derives every folder's count from the persisted lists.
    pub fn refresh_counts(&mut self) -> Result<()> {
        for folder in &mut self.folders {
            folder.count = persisted_count(&self.kv, &folder.id)?;
        }
        Ok(())
    }

    pub fn list_with_counts(&mut self) -> Result<&[Folder]> {
        self.refresh_counts()?;
        Ok(&self.folders)
    }
}
