use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>, prefix: &str) -> Result<CmdResult> {
    let touched = store.bulk_add_prefix(prefix)?;
    let mut result = CmdResult::default();
    if prefix.trim().is_empty() {
        result.add_message(CmdMessage::info("Empty prefix, nothing changed"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Added prefix \"{}\" to {} items",
            prefix,
            touched
        )));
    }
    Ok(result)
}
