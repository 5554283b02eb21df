use crate::clipboard::Clipboard;
use crate::commands::{remove, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FolderId;
use crate::store::{ItemStore, KeyValueStore};

/// Copies `content`. Touches no state.
pub fn run<C: Clipboard>(clipboard: &mut C, content: &str) -> Result<CmdResult> {
    clipboard.write_text(content)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Copied! Content copied to clipboard"));
    Ok(result)
}

/// Copies `content`, then removes the item at `index` from `folder`.
///
/// A failed copy is reported as an error message and the remove still runs.
pub fn copy_and_remove<S: KeyValueStore, C: Clipboard>(
    store: &mut ItemStore<S>,
    clipboard: &mut C,
    content: &str,
    folder: &FolderId,
    index: usize,
) -> Result<CmdResult> {
    let mut messages = Vec::new();
    match run(clipboard, content) {
        Ok(copied) => messages.extend(copied.messages),
        Err(e) => {
            tracing::warn!(error = %e, "copy failed, removing anyway");
            messages.push(CmdMessage::error(format!("Copy Failed: {}", e)));
        }
    }

    let mut result = remove::run(store, folder, index)?;
    messages.append(&mut result.messages);
    result.messages = messages;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::commands::MessageLevel;
    use crate::error::TextsepError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn copy_writes_to_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        let result = run(&mut clipboard, "hello").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("hello"));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn copy_failure_is_clipboard_error() {
        let mut clipboard = MemoryClipboard::failing();
        assert!(matches!(
            run(&mut clipboard, "hello"),
            Err(TextsepError::Clipboard(_))
        ));
    }

    #[test]
    fn copy_and_remove_moves_item() {
        let mut fx = StoreFixture::new().with_saved(&["take me", "stay"]);
        let mut clipboard = MemoryClipboard::new();

        let result =
            copy_and_remove(&mut fx.store, &mut clipboard, "take me", &FolderId::Saved, 0)
                .unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("take me"));
        assert!(!result.has_errors());
        assert_eq!(fx.store.items(&FolderId::Saved).unwrap().len(), 1);
        assert_eq!(fx.store.items(&FolderId::Removed).unwrap().len(), 1);
    }

    #[test]
    fn copy_failure_does_not_block_remove() {
        let mut fx = StoreFixture::new().with_saved(&["take me"]);
        let mut clipboard = MemoryClipboard::failing();

        let result =
            copy_and_remove(&mut fx.store, &mut clipboard, "take me", &FolderId::Saved, 0)
                .unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Success);
        assert!(fx.store.items(&FolderId::Saved).unwrap().is_empty());
    }
}
