use crate::commands::{CmdMessage, CmdResult};
use crate::detect::{self, Strategy};
use crate::error::Result;
use crate::model::FolderId;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(
    store: &mut ItemStore<S>,
    folder: &FolderId,
    text: &str,
    separator: &str,
    strategy: Strategy,
) -> Result<CmdResult> {
    let added = store.process_into(folder, text, separator, strategy)?;
    let mut result = CmdResult::default();

    if added.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No separated content detected ({} strategy)",
            strategy
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Text Processed: Found {} separated items",
            added.len()
        )));
    }
    Ok(result.with_affected_items(added))
}

/// Runs detection without storing anything.
pub fn preview(text: &str, separator: &str, strategy: Strategy) -> CmdResult {
    let detected = detect::detect(text, separator, strategy);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Found {} separated items",
        detected.len()
    )));
    result.with_affected_items(detected)
}
