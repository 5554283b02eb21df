use super::backend::KeyValueStore;
use super::keys;
use crate::detect::{self, Strategy};
use crate::error::{Result, TextsepError};
use crate::model::{ContentItem, FolderId};
use std::collections::{HashMap, HashSet};

/// Reads and decodes the list stored under `key`.
///
/// A missing key is an empty list. An undecodable value is also an empty
/// list, with the decode error returned alongside.
pub(crate) fn load_list<S: KeyValueStore>(
    kv: &S,
    key: &str,
) -> Result<(Vec<ContentItem>, Option<TextsepError>)> {
    let Some(raw) = kv.get(key)? else {
        return Ok((Vec::new(), None));
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok((items, None)),
        Err(source) => {
            tracing::warn!(key, error = %source, "stored list is malformed, treating as empty");
            Ok((
                Vec::new(),
                Some(TextsepError::StorageDecode {
                    key: key.to_string(),
                    source,
                }),
            ))
        }
    }
}

/// Number of items currently persisted for `folder`.
pub fn persisted_count<S: KeyValueStore>(kv: &S, folder: &FolderId) -> Result<usize> {
    let (items, _) = load_list(kv, &keys::list_key(folder))?;
    Ok(items.len())
}

/// Owns every item list and writes each one through to the key-value store
/// as soon as it changes.
pub struct ItemStore<S: KeyValueStore> {
    kv: S,
    saved: Vec<ContentItem>,
    removed: Vec<ContentItem>,
    custom: HashMap<String, Vec<ContentItem>>,
    recovered: Vec<TextsepError>,
}

impl<S: KeyValueStore> ItemStore<S> {
    /// Loads the built-in lists. User folders are attached separately with
    /// [`ItemStore::attach_folder`].
    pub fn open(kv: S) -> Result<Self> {
        let mut recovered = Vec::new();
        let (saved, err) = load_list(&kv, keys::SAVED_ITEMS)?;
        recovered.extend(err);
        let (removed, err) = load_list(&kv, keys::REMOVED_ITEMS)?;
        recovered.extend(err);

        Ok(Self {
            kv,
            saved,
            removed,
            custom: HashMap::new(),
            recovered,
        })
    }

    /// Loads the list for a user folder so it can be read and mutated.
    /// Attaching an already attached folder is a no-op.
    pub fn attach_folder(&mut self, folder: &FolderId) -> Result<()> {
        let FolderId::Custom(id) = folder else {
            return Ok(());
        };
        if self.custom.contains_key(id) {
            return Ok(());
        }
        let (items, err) = load_list(&self.kv, &keys::list_key(folder))?;
        self.recovered.extend(err);
        self.custom.insert(id.clone(), items);
        Ok(())
    }

    /// Decode errors hit while loading, drained so each is reported once.
    pub fn take_recovered_errors(&mut self) -> Vec<TextsepError> {
        std::mem::take(&mut self.recovered)
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn items(&self, folder: &FolderId) -> Result<&[ContentItem]> {
        match folder {
            FolderId::Saved => Ok(&self.saved),
            FolderId::Removed => Ok(&self.removed),
            FolderId::Custom(id) => self
                .custom
                .get(id)
                .map(Vec::as_slice)
                .ok_or_else(|| TextsepError::FolderNotFound(id.clone())),
        }
    }

    pub fn get(&self, folder: &FolderId, index: usize) -> Result<&ContentItem> {
        let items = self.items(folder)?;
        items.get(index).ok_or_else(|| TextsepError::Index {
            index,
            len: items.len(),
            folder: folder.to_string(),
        })
    }

    fn list_mut(&mut self, folder: &FolderId) -> Result<&mut Vec<ContentItem>> {
        match folder {
            FolderId::Saved => Ok(&mut self.saved),
            FolderId::Removed => Ok(&mut self.removed),
            FolderId::Custom(id) => self
                .custom
                .get_mut(id)
                .ok_or_else(|| TextsepError::FolderNotFound(id.clone())),
        }
    }

    fn check_index(&self, folder: &FolderId, index: usize) -> Result<()> {
        self.get(folder, index).map(|_| ())
    }

    fn persist(&self, folder: &FolderId) -> Result<()> {
        let key = keys::list_key(folder);
        let encoded = serde_json::to_string(self.items(folder)?)?;
        self.kv.set(&key, &encoded).inspect_err(|e| {
            tracing::warn!(key = %key, error = %e, "write failed, memory and storage now differ");
        })
    }

    /// Writes both lists of a move. Both writes are attempted; the first
    /// failure is returned.
    fn persist_pair(&self, from: &FolderId, to: &FolderId) -> Result<()> {
        let first = self.persist(from);
        let second = self.persist(to);
        first.and(second)
    }

    /// Splits `text` and appends the result to "saved".
    pub fn process(
        &mut self,
        text: &str,
        separator: &str,
        strategy: Strategy,
    ) -> Result<Vec<ContentItem>> {
        self.process_into(&FolderId::Saved, text, separator, strategy)
    }

    /// Splits `text` and appends the result to `folder`.
    pub fn process_into(
        &mut self,
        folder: &FolderId,
        text: &str,
        separator: &str,
        strategy: Strategy,
    ) -> Result<Vec<ContentItem>> {
        if text.trim().is_empty() {
            return Err(TextsepError::Validation(
                "Please enter some text to process".to_string(),
            ));
        }
        if *folder == FolderId::Removed {
            return Err(TextsepError::Api(
                "Cannot add items directly to the removed folder".to_string(),
            ));
        }

        let detected = detect::detect(text, separator, strategy);
        if detected.is_empty() {
            return Ok(detected);
        }

        self.list_mut(folder)?.extend(detected.iter().cloned());
        self.persist(folder)?;
        Ok(detected)
    }

    /// Removes the item at `index`. Anything leaving a live folder lands at
    /// the end of "removed"; removing from "removed" discards it.
    pub fn remove(&mut self, folder: &FolderId, index: usize) -> Result<ContentItem> {
        self.check_index(folder, index)?;
        let item = self.list_mut(folder)?.remove(index);

        if *folder == FolderId::Removed {
            self.persist(folder)?;
        } else {
            self.removed.push(item.clone());
            self.persist_pair(folder, &FolderId::Removed)?;
        }
        Ok(item)
    }

    /// Moves the item at `index` in "removed" back to the end of "saved".
    pub fn restore(&mut self, index: usize) -> Result<ContentItem> {
        self.move_item(&FolderId::Removed, index, &FolderId::Saved)
    }

    /// Moves an item between folders, appending it to `to`.
    pub fn move_item(
        &mut self,
        from: &FolderId,
        index: usize,
        to: &FolderId,
    ) -> Result<ContentItem> {
        if from == to {
            return Err(TextsepError::Api(format!(
                "Item is already in folder '{}'",
                to
            )));
        }
        if *to == FolderId::Removed {
            return self.remove(from, index);
        }
        // Fail before touching the source if the target is unknown.
        self.items(to)?;
        self.check_index(from, index)?;

        let item = self.list_mut(from)?.remove(index);
        self.list_mut(to)?.push(item.clone());
        self.persist_pair(from, to)?;
        Ok(item)
    }

    /// Replaces the content of one item; id, type and timestamp are kept.
    pub fn edit(
        &mut self,
        folder: &FolderId,
        index: usize,
        new_content: &str,
    ) -> Result<ContentItem> {
        let content = new_content.trim();
        if content.is_empty() {
            return Err(TextsepError::Validation(
                "Item content cannot be empty".to_string(),
            ));
        }
        self.check_index(folder, index)?;

        let item = &mut self.list_mut(folder)?[index];
        item.content = content.to_string();
        let updated = item.clone();
        self.persist(folder)?;
        Ok(updated)
    }

    /// Empties `folder` and drops its stored value. Returns how many items
    /// were cleared.
    pub fn clear_all(&mut self, folder: &FolderId) -> Result<usize> {
        let list = self.list_mut(folder)?;
        let cleared = list.len();
        list.clear();
        self.kv.remove(&keys::list_key(folder))?;
        Ok(cleared)
    }

    /// Drops later items in "saved" whose content repeats an earlier one.
    /// Returns the number removed.
    pub fn remove_duplicates(&mut self) -> Result<usize> {
        let before = self.saved.len();
        let mut seen = HashSet::new();
        self.saved.retain(|item| seen.insert(item.content.clone()));

        let removed = before - self.saved.len();
        if removed > 0 {
            self.persist(&FolderId::Saved)?;
        }
        Ok(removed)
    }

    /// Prepends `prefix` and a space to every item in "saved".
    /// The prefix is used as typed; an all-whitespace prefix changes nothing.
    /// Returns the number of items touched.
    pub fn bulk_add_prefix(&mut self, prefix: &str) -> Result<usize> {
        if prefix.trim().is_empty() || self.saved.is_empty() {
            return Ok(0);
        }

        for item in &mut self.saved {
            item.content = format!("{} {}", prefix, item.content);
        }
        self.persist(&FolderId::Saved)?;
        Ok(self.saved.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::fixtures::StoreFixture;

    fn contents(store: &ItemStore<std::rc::Rc<MemBackend>>, folder: &FolderId) -> Vec<String> {
        store
            .items(folder)
            .unwrap()
            .iter()
            .map(|i| i.content.clone())
            .collect()
    }

    #[test]
    fn process_appends_and_persists() {
        let mut fx = StoreFixture::new();
        let added = fx
            .store
            .process("1. First\n2. Second", "", Strategy::Pattern)
            .unwrap();

        assert_eq!(added.len(), 2);
        assert_eq!(fx.store.items(&FolderId::Saved).unwrap().len(), 2);
        assert_eq!(persisted_count(&fx.backend, &FolderId::Saved).unwrap(), 2);
    }

    #[test]
    fn process_rejects_blank_text() {
        let mut fx = StoreFixture::new();
        let err = fx.store.process("  \n ", "", Strategy::Pattern).unwrap_err();
        assert!(matches!(err, TextsepError::Validation(_)));
        assert!(!fx.backend.contains_key(keys::SAVED_ITEMS));
    }

    #[test]
    fn process_with_nothing_detected_is_not_an_error() {
        let mut fx = StoreFixture::new();
        let added = fx
            .store
            .process("no list here", "", Strategy::Pattern)
            .unwrap();
        assert!(added.is_empty());
    }

    #[test]
    fn remove_from_saved_moves_to_removed() {
        let mut fx = StoreFixture::new().with_saved(&["a", "b", "c"]);
        let item = fx.store.remove(&FolderId::Saved, 1).unwrap();

        assert_eq!(item.content, "b");
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["a", "c"]);
        let removed = fx.store.items(&FolderId::Removed).unwrap();
        assert_eq!(removed.iter().filter(|i| i.id == item.id).count(), 1);
        assert_eq!(persisted_count(&fx.backend, &FolderId::Removed).unwrap(), 1);
    }

    #[test]
    fn remove_from_removed_discards() {
        let mut fx = StoreFixture::new().with_removed(&["gone"]);
        fx.store.remove(&FolderId::Removed, 0).unwrap();

        assert!(fx.store.items(&FolderId::Removed).unwrap().is_empty());
        assert!(fx.store.items(&FolderId::Saved).unwrap().is_empty());
    }

    #[test]
    fn remove_out_of_range_is_index_error() {
        let mut fx = StoreFixture::new().with_saved(&["a"]);
        let err = fx.store.remove(&FolderId::Saved, 1).unwrap_err();
        assert!(matches!(err, TextsepError::Index { index: 1, len: 1, .. }));
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["a"]);
    }

    #[test]
    fn restore_returns_item_to_saved() {
        let mut fx = StoreFixture::new().with_saved(&["keep", "back"]);
        fx.store.remove(&FolderId::Saved, 1).unwrap();
        fx.store.restore(0).unwrap();

        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["keep", "back"]);
        assert!(fx.store.items(&FolderId::Removed).unwrap().is_empty());
    }

    #[test]
    fn edit_changes_only_content() {
        let mut fx = StoreFixture::new().with_saved(&["one", "two"]);
        let before = fx.store.items(&FolderId::Saved).unwrap().to_vec();

        fx.store.edit(&FolderId::Saved, 0, "  uno ").unwrap();

        let after = fx.store.items(&FolderId::Saved).unwrap();
        assert_eq!(after[0].content, "uno");
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[0].kind, before[0].kind);
        assert_eq!(after[0].timestamp, before[0].timestamp);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn edit_rejects_blank_and_bad_index() {
        let mut fx = StoreFixture::new().with_saved(&["one"]);
        assert!(matches!(
            fx.store.edit(&FolderId::Saved, 0, "   "),
            Err(TextsepError::Validation(_))
        ));
        assert!(matches!(
            fx.store.edit(&FolderId::Saved, 3, "x"),
            Err(TextsepError::Index { .. })
        ));
    }

    #[test]
    fn clear_all_drops_stored_value() {
        let mut fx = StoreFixture::new().with_saved(&["a", "b"]);
        assert!(fx.backend.contains_key(keys::SAVED_ITEMS));

        let cleared = fx.store.clear_all(&FolderId::Saved).unwrap();
        assert_eq!(cleared, 2);
        assert!(!fx.backend.contains_key(keys::SAVED_ITEMS));
        assert!(fx.store.items(&FolderId::Saved).unwrap().is_empty());
    }

    #[test]
    fn remove_duplicates_keeps_first_and_is_idempotent() {
        let mut fx = StoreFixture::new().with_saved(&["a", "b", "a", "c", "b"]);
        let first_a = fx.store.get(&FolderId::Saved, 0).unwrap().id.clone();

        assert_eq!(fx.store.remove_duplicates().unwrap(), 2);
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["a", "b", "c"]);
        assert_eq!(fx.store.get(&FolderId::Saved, 0).unwrap().id, first_a);

        let once = fx.store.items(&FolderId::Saved).unwrap().to_vec();
        assert_eq!(fx.store.remove_duplicates().unwrap(), 0);
        assert_eq!(fx.store.items(&FolderId::Saved).unwrap(), once.as_slice());
    }

    #[test]
    fn remove_duplicates_ignores_removed_folder() {
        let mut fx = StoreFixture::new().with_saved(&["a"]).with_removed(&["a", "a"]);
        assert_eq!(fx.store.remove_duplicates().unwrap(), 0);
        assert_eq!(fx.store.items(&FolderId::Removed).unwrap().len(), 2);
    }

    #[test]
    fn bulk_prefix_prepends_with_space() {
        let mut fx = StoreFixture::new().with_saved(&["buy milk", "call bob"]);
        let kinds: Vec<_> = fx
            .store
            .items(&FolderId::Saved)
            .unwrap()
            .iter()
            .map(|i| (i.id.clone(), i.kind.clone()))
            .collect();

        assert_eq!(fx.store.bulk_add_prefix("TODO").unwrap(), 2);
        assert_eq!(
            contents(&fx.store, &FolderId::Saved),
            vec!["TODO buy milk", "TODO call bob"]
        );
        let after: Vec<_> = fx
            .store
            .items(&FolderId::Saved)
            .unwrap()
            .iter()
            .map(|i| (i.id.clone(), i.kind.clone()))
            .collect();
        assert_eq!(kinds, after);
    }

    #[test]
    fn bulk_prefix_blank_is_noop() {
        let mut fx = StoreFixture::new().with_saved(&["x"]);
        assert_eq!(fx.store.bulk_add_prefix("  ").unwrap(), 0);
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["x"]);
    }

    #[test]
    fn malformed_stored_list_loads_empty_with_error() {
        let backend = MemBackend::new();
        backend.insert_raw(keys::SAVED_ITEMS, "{not json");
        let mut store = ItemStore::open(&backend).unwrap();

        assert!(store.items(&FolderId::Saved).unwrap().is_empty());
        let errors = store.take_recovered_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], TextsepError::StorageDecode { .. }));
        assert!(store.take_recovered_errors().is_empty());
    }

    #[test]
    fn write_failure_keeps_memory_change() {
        let mut fx = StoreFixture::new().with_saved(&["a", "b"]);
        fx.backend.set_simulate_write_error(true);

        let err = fx.store.edit(&FolderId::Saved, 0, "changed").unwrap_err();
        assert!(matches!(err, TextsepError::Store(_)));
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["changed", "b"]);

        let reopened = ItemStore::open(fx.backend.clone()).unwrap();
        assert_eq!(reopened.get(&FolderId::Saved, 0).unwrap().content, "a");
    }

    #[test]
    fn write_failure_keeps_move_in_memory() {
        let mut fx = StoreFixture::new().with_saved(&["a", "b", "c"]);
        let work = FolderId::Custom("work".to_string());
        fx.store.attach_folder(&work).unwrap();
        fx.backend.set_simulate_write_error(true);

        let err = fx.store.remove(&FolderId::Saved, 0).unwrap_err();
        assert!(matches!(err, TextsepError::Store(_)));
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["b", "c"]);
        assert_eq!(contents(&fx.store, &FolderId::Removed), vec!["a"]);

        let err = fx.store.move_item(&FolderId::Saved, 0, &work).unwrap_err();
        assert!(matches!(err, TextsepError::Store(_)));
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["c"]);
        assert_eq!(contents(&fx.store, &work), vec!["b"]);

        // Storage never saw either change.
        let reopened = ItemStore::open(fx.backend.clone()).unwrap();
        assert_eq!(reopened.items(&FolderId::Saved).unwrap().len(), 3);
        assert!(reopened.items(&FolderId::Removed).unwrap().is_empty());
    }

    #[test]
    fn bulk_prefix_keeps_prefix_as_typed() {
        let mut fx = StoreFixture::new().with_saved(&["x"]);
        assert_eq!(fx.store.bulk_add_prefix(" >").unwrap(), 1);
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec![" > x"]);
    }

    #[test]
    fn custom_folders_need_attaching() {
        let mut fx = StoreFixture::new().with_saved(&["a"]);
        let work = FolderId::Custom("work".to_string());

        assert!(matches!(
            fx.store.items(&work),
            Err(TextsepError::FolderNotFound(_))
        ));

        fx.store.attach_folder(&work).unwrap();
        fx.store.move_item(&FolderId::Saved, 0, &work).unwrap();

        assert_eq!(contents(&fx.store, &work), vec!["a"]);
        assert_eq!(persisted_count(&fx.backend, &work).unwrap(), 1);
        assert!(fx.store.items(&FolderId::Saved).unwrap().is_empty());
    }

    #[test]
    fn removing_from_custom_folder_goes_to_removed() {
        let work = FolderId::Custom("work".to_string());
        let mut fx = StoreFixture::new();
        fx.store.attach_folder(&work).unwrap();
        fx.store
            .process_into(&work, "- one", "", Strategy::Pattern)
            .unwrap();

        fx.store.remove(&work, 0).unwrap();
        assert_eq!(contents(&fx.store, &FolderId::Removed), vec!["one"]);
    }

    #[test]
    fn move_to_same_folder_is_rejected() {
        let mut fx = StoreFixture::new().with_saved(&["a"]);
        assert!(fx
            .store
            .move_item(&FolderId::Saved, 0, &FolderId::Saved)
            .is_err());
        assert_eq!(contents(&fx.store, &FolderId::Saved), vec!["a"]);
    }

    #[test]
    fn process_into_removed_is_rejected() {
        let mut fx = StoreFixture::new();
        assert!(fx
            .store
            .process_into(&FolderId::Removed, "- a", "", Strategy::Pattern)
            .is_err());
    }
}
