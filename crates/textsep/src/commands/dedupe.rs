use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>) -> Result<CmdResult> {
    let removed = store.remove_duplicates()?;
    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info("No duplicates found"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} duplicate items",
            removed
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FolderId;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn reports_removed_count() {
        let mut fx = StoreFixture::new().with_saved(&["x", "x", "y"]);
        let result = run(&mut fx.store).unwrap();
        assert_eq!(result.messages[0].content, "Removed 1 duplicate items");
        assert_eq!(fx.store.items(&FolderId::Saved).unwrap().len(), 2);
    }
}
