use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FolderId;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>, folder: &FolderId) -> Result<CmdResult> {
    let cleared = store.clear_all(folder)?;
    let mut result = CmdResult::default();
    if cleared == 0 {
        result.add_message(CmdMessage::info(format!("Folder '{}' is already empty", folder)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} items from '{}'",
            cleared, folder
        )));
    }
    Ok(result)
}
