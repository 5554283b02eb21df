use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FolderId;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(
    store: &mut ItemStore<S>,
    folder: &FolderId,
    index: usize,
    new_content: &str,
) -> Result<CmdResult> {
    let item = store.edit(folder, index, new_content)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item {} updated", index + 1)));
    Ok(result.with_affected_items(vec![item]))
}
