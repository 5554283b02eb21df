use crate::error::Result;
use std::rc::Rc;

/// Abstract interface for the persisted key-value medium.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ItemStore and FolderRegistry handle the "what".
///
/// All methods take `&self`; backends that hold state in memory use
/// interior mutability since the whole application is single-threaded.
pub trait KeyValueStore {
    /// Read the value stored under `key`. Returns Ok(None) when unset.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic so a crash never leaves a half-written value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an unset key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
