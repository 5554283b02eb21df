use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::settings;
use crate::store::KeyValueStore;

pub fn show<S: KeyValueStore>(kv: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_value(settings::custom_separator(kv)?))
}

pub fn set<S: KeyValueStore>(kv: &S, separator: &str) -> Result<CmdResult> {
    settings::set_custom_separator(kv, separator)?;
    let current = settings::custom_separator(kv)?;
    let mut result = CmdResult::default().with_value(current.clone());
    result.add_message(CmdMessage::success(format!(
        "Custom separator set to \"{}\"",
        current
    )));
    Ok(result)
}
