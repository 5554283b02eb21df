use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextsepError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Index {index} is out of range for folder '{folder}' ({len} items)")]
    Index {
        index: usize,
        len: usize,
        folder: String,
    },

    #[error("Could not decode stored data under '{key}': {source}")]
    StorageDecode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TextsepError>;
