use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::folders::FolderRegistry;
use crate::model::FolderId;
use crate::store::KeyValueStore;

pub fn list<S: KeyValueStore>(registry: &mut FolderRegistry<S>) -> Result<CmdResult> {
    let folders = registry.list_with_counts()?.to_vec();
    Ok(CmdResult::default().with_folders(folders))
}

pub fn create<S: KeyValueStore>(
    registry: &mut FolderRegistry<S>,
    label: &str,
) -> Result<CmdResult> {
    let folder = registry.create(label)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created folder '{}' ({})",
        folder.label, folder.id
    )));
    Ok(result.with_folders(vec![folder]))
}

pub fn rename<S: KeyValueStore>(
    registry: &mut FolderRegistry<S>,
    id: &FolderId,
    label: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if registry.rename(id, label)? {
        result.add_message(CmdMessage::success(format!(
            "Folder {} renamed to '{}'",
            id,
            label.trim()
        )));
    } else {
        result.add_message(CmdMessage::info("Empty name, folder unchanged"));
    }
    Ok(result)
}
