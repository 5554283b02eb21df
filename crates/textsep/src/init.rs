//! # Data Directory
//!
//! Everything textsep persists lives in one directory: the `.kv` files of
//! the key-value store plus `config.json`.
//!
//! Resolution order, first match wins:
//! 1. An explicit override (the CLI's `--data` flag)
//! 2. The `TEXTSEP_DATA` environment variable
//! 3. The OS data directory from the `directories` crate
//!    (e.g. `~/.local/share/textsep` on Linux)
//!
//! The directory is created on first write, not here.

use crate::api::TextsepApi;
use crate::clipboard::SystemClipboard;
use crate::config::TextsepConfig;
use crate::error::{Result, TextsepError};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "TEXTSEP_DATA";

pub struct TextsepContext {
    pub api: TextsepApi<FsBackend, SystemClipboard>,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "textsep", "textsep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TextsepError::Api("Could not determine data directory".to_string()))
}

/// Loads config and opens the file-backed API for the resolved directory.
pub fn initialize(data_override: Option<PathBuf>) -> Result<TextsepContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = TextsepConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "opening store");

    let api = TextsepApi::open(FsBackend::new(&data_dir), SystemClipboard, config)?
        .with_config_dir(&data_dir);
    Ok(TextsepContext { api, data_dir })
}
