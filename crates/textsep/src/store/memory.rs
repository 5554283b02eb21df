use super::item_store::ItemStore;
use super::mem_backend::MemBackend;
use std::rc::Rc;

/// Item store over a shared in-memory backend.
pub type InMemoryItemStore = ItemStore<Rc<MemBackend>>;

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{ContentItem, FolderId};
    use crate::store::backend::KeyValueStore;
    use crate::store::keys;

    pub struct StoreFixture {
        pub backend: Rc<MemBackend>,
        pub store: InMemoryItemStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let backend = Rc::new(MemBackend::new());
            let store = ItemStore::open(backend.clone()).unwrap();
            Self { backend, store }
        }

        fn with_items(self, folder: FolderId, contents: &[&str]) -> Self {
            let mut items = self.store.items(&folder).unwrap().to_vec();
            items.extend(
                contents
                    .iter()
                    .map(|c| ContentItem::new(c, "Single Content")),
            );
            let encoded = serde_json::to_string(&items).unwrap();
            self.backend
                .set(&keys::list_key(&folder), &encoded)
                .unwrap();
            Self {
                store: ItemStore::open(self.backend.clone()).unwrap(),
                backend: self.backend,
            }
        }

        pub fn with_saved(self, contents: &[&str]) -> Self {
            self.with_items(FolderId::Saved, contents)
        }

        pub fn with_removed(self, contents: &[&str]) -> Self {
            self.with_items(FolderId::Removed, contents)
        }
    }
}
