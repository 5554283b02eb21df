use crate::commands::{excerpt, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FolderId;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(
    store: &mut ItemStore<S>,
    folder: &FolderId,
    index: usize,
) -> Result<CmdResult> {
    let item = store.remove(folder, index)?;
    let mut result = CmdResult::default();
    let text = if *folder == FolderId::Removed {
        format!("Item deleted permanently: {}", excerpt(&item.content))
    } else {
        format!("Item removed successfully: {}", excerpt(&item.content))
    };
    result.add_message(CmdMessage::success(text));
    Ok(result.with_affected_items(vec![item]))
}

pub fn restore<S: KeyValueStore>(store: &mut ItemStore<S>, index: usize) -> Result<CmdResult> {
    let item = store.restore(index)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item restored: {}",
        excerpt(&item.content)
    )));
    Ok(result.with_affected_items(vec![item]))
}

pub fn move_item<S: KeyValueStore>(
    store: &mut ItemStore<S>,
    from: &FolderId,
    index: usize,
    to: &FolderId,
) -> Result<CmdResult> {
    let item = store.move_item(from, index, to)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item moved to '{}': {}",
        to,
        excerpt(&item.content)
    )));
    Ok(result.with_affected_items(vec![item]))
}
