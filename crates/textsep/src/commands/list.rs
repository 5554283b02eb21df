use crate::commands::{CmdMessage, CmdResult, IndexedItem, ListedPage};
use crate::error::{Result, TextsepError};
use crate::folders::FolderRegistry;
use crate::pagination::PageState;
use crate::store::{ItemStore, KeyValueStore};

/// Lists the current page of the folder selected in `state`.
///
/// Indexes in the result are absolute positions in the folder, so they can
/// be handed straight back to remove/edit/copy.
pub fn run<S: KeyValueStore, R: KeyValueStore>(
    store: &ItemStore<S>,
    registry: &FolderRegistry<R>,
    state: &PageState,
) -> Result<CmdResult> {
    let folder_id = state.folder();
    let mut folder = registry
        .get(folder_id)
        .cloned()
        .ok_or_else(|| TextsepError::FolderNotFound(folder_id.to_string()))?;

    let items = store.items(folder_id)?;
    folder.count = items.len();

    let page = state.current_page();
    let offset = (page - 1) * state.page_size().get();
    let listed: Vec<IndexedItem> = state
        .slice(items)
        .iter()
        .enumerate()
        .map(|(i, item)| IndexedItem {
            index: offset + i,
            item: item.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info(format!("No items in {}", folder.label)));
    }

    Ok(result.with_listed(ListedPage {
        folder,
        items: listed,
        page,
        total_pages: state.total_pages(items.len()),
        total_items: items.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FolderId;
    use crate::pagination::PageSize;
    use crate::store::memory::fixtures::StoreFixture;

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("item {}", i)).collect()
    }

    #[test]
    fn second_page_has_absolute_indexes() {
        let contents = numbered(25);
        let refs: Vec<&str> = contents.iter().map(String::as_str).collect();
        let fx = StoreFixture::new().with_saved(&refs);
        let registry = FolderRegistry::open(fx.backend.clone()).unwrap();

        let mut state = PageState::new(PageSize::Ten);
        state.go_to(2, 25);
        let result = run(&fx.store, &registry, &state).unwrap();
        let page = result.listed.unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].index, 10);
        assert_eq!(page.items[0].item.content, "item 11");
        assert_eq!(page.folder.count, 25);
    }

    #[test]
    fn empty_folder_lists_one_page() {
        let fx = StoreFixture::new();
        let registry = FolderRegistry::open(fx.backend.clone()).unwrap();
        let mut state = PageState::default();
        state.select_folder(FolderId::Removed);

        let result = run(&fx.store, &registry, &state).unwrap();
        let page = result.listed.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unknown_folder_is_not_found() {
        let fx = StoreFixture::new();
        let registry = FolderRegistry::open(fx.backend.clone()).unwrap();
        let mut state = PageState::default();
        state.select_folder(FolderId::Custom("404".into()));

        assert!(matches!(
            run(&fx.store, &registry, &state),
            Err(TextsepError::FolderNotFound(_))
        ));
    }
}
