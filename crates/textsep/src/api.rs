//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every textsep operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the command function for each operation
//! - **Owns the session state**: the item store, folder registry, clipboard,
//!   loaded config and the current [`PageState`]
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! It does no I/O of its own beyond what the backend and clipboard do, and it
//! formats nothing.
//!
//! ## Folder counts
//!
//! Every mutating method runs through [`TextsepApi::observe`], which
//! re-derives the folder counts from the persisted lists once the mutation
//! has finished, successful or not. Reads never trigger a recompute.
//!
//! ## Indexes
//!
//! All indexes here are 0-based positions in a folder. Translating from what
//! the user typed is the UI's job.
//!
//! ## Generic over backend and clipboard
//!
//! `TextsepApi<B, C>`:
//! - Production: `TextsepApi<FsBackend, SystemClipboard>`
//! - Testing: `TextsepApi<MemBackend, MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::TextsepConfig;
use crate::detect::Strategy;
use crate::error::{Result, TextsepError};
use crate::folders::FolderRegistry;
use crate::model::FolderId;
use crate::pagination::{PageSize, PageState};
use crate::settings;
use crate::store::{ItemStore, KeyValueStore};
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct TextsepApi<B: KeyValueStore, C: Clipboard> {
    backend: Rc<B>,
    store: ItemStore<Rc<B>>,
    folders: FolderRegistry<Rc<B>>,
    clipboard: C,
    config: TextsepConfig,
    page: PageState,
    config_dir: Option<PathBuf>,
}

impl<B: KeyValueStore, C: Clipboard> TextsepApi<B, C> {
    /// Loads every list the registry knows about and derives initial counts.
    pub fn open(backend: B, clipboard: C, config: TextsepConfig) -> Result<Self> {
        let backend = Rc::new(backend);
        let mut store = ItemStore::open(backend.clone())?;
        let mut folders = FolderRegistry::open(backend.clone())?;

        for id in folders.custom_ids() {
            store.attach_folder(id)?;
        }
        folders.refresh_counts()?;

        Ok(Self {
            backend,
            store,
            folders,
            clipboard,
            page: PageState::new(config.items_per_page),
            config,
            config_dir: None,
        })
    }

    /// Directory holding `config.json`, needed by [`TextsepApi::config`].
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Data problems recovered from while loading, as displayable warnings.
    pub fn take_warnings(&mut self) -> Vec<CmdMessage> {
        self.store
            .take_recovered_errors()
            .into_iter()
            .chain(self.folders.take_recovered_errors())
            .map(|e| CmdMessage::warning(format!("{} (data was reset)", e)))
            .collect()
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn settings(&self) -> &TextsepConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Overrides the detection strategy for this session only.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.strategy = strategy;
    }

    /// Recomputes folder counts after a mutation, whatever its outcome.
    fn observe<T>(&mut self, outcome: Result<T>) -> Result<T> {
        if let Err(e) = self.folders.refresh_counts() {
            tracing::warn!(error = %e, "could not refresh folder counts");
        }
        outcome
    }

    // --- Processing ---

    pub fn process(&mut self, text: &str) -> Result<CmdResult> {
        self.process_into(&FolderId::Saved, text)
    }

    pub fn process_into(&mut self, folder: &FolderId, text: &str) -> Result<CmdResult> {
        let separator = settings::custom_separator(&self.backend)?;
        let strategy = self.config.strategy;
        let outcome = commands::process::run(&mut self.store, folder, text, &separator, strategy);
        self.observe(outcome)
    }

    pub fn preview(&self, text: &str) -> Result<CmdResult> {
        let separator = settings::custom_separator(&self.backend)?;
        Ok(commands::process::preview(
            text,
            &separator,
            self.config.strategy,
        ))
    }

    // --- Clipboard ---

    pub fn copy_text(&mut self, text: &str) -> Result<CmdResult> {
        commands::copy::run(&mut self.clipboard, text)
    }

    pub fn copy_item(&mut self, folder: &FolderId, index: usize) -> Result<CmdResult> {
        let content = self.store.get(folder, index)?.content.clone();
        commands::copy::run(&mut self.clipboard, &content)
    }

    pub fn copy_and_remove(&mut self, folder: &FolderId, index: usize) -> Result<CmdResult> {
        let content = self.store.get(folder, index)?.content.clone();
        let outcome = commands::copy::copy_and_remove(
            &mut self.store,
            &mut self.clipboard,
            &content,
            folder,
            index,
        );
        self.observe(outcome)
    }

    // --- Item mutations ---

    pub fn remove(&mut self, folder: &FolderId, index: usize) -> Result<CmdResult> {
        let outcome = commands::remove::run(&mut self.store, folder, index);
        self.observe(outcome)
    }

    pub fn edit(&mut self, folder: &FolderId, index: usize, content: &str) -> Result<CmdResult> {
        let outcome = commands::edit::run(&mut self.store, folder, index, content);
        self.observe(outcome)
    }

    /// Edits an item in "saved".
    pub fn edit_item(&mut self, index: usize, content: &str) -> Result<CmdResult> {
        self.edit(&FolderId::Saved, index, content)
    }

    pub fn restore(&mut self, index: usize) -> Result<CmdResult> {
        let outcome = commands::remove::restore(&mut self.store, index);
        self.observe(outcome)
    }

    pub fn move_item(
        &mut self,
        from: &FolderId,
        index: usize,
        to: &FolderId,
    ) -> Result<CmdResult> {
        let outcome = commands::remove::move_item(&mut self.store, from, index, to);
        self.observe(outcome)
    }

    pub fn clear_all(&mut self, folder: &FolderId) -> Result<CmdResult> {
        let outcome = commands::clear::run(&mut self.store, folder);
        self.observe(outcome)
    }

    pub fn remove_duplicates(&mut self) -> Result<CmdResult> {
        let outcome = commands::dedupe::run(&mut self.store);
        self.observe(outcome)
    }

    pub fn bulk_add_prefix(&mut self, prefix: &str) -> Result<CmdResult> {
        let outcome = commands::prefix::run(&mut self.store, prefix);
        self.observe(outcome)
    }

    // --- Viewing ---

    /// The current page of the active folder. A page left past the end by a
    /// shrinking list is pulled back to the last page first.
    pub fn list(&mut self) -> Result<CmdResult> {
        let len = self.store.items(self.page.folder())?.len();
        let current = self.page.current_page();
        self.page.go_to(current, len);
        commands::list::run(&self.store, &self.folders, &self.page)
    }

    /// Makes `folder` the active one, back on page 1.
    pub fn select_folder(&mut self, folder: FolderId) -> Result<()> {
        if !self.folders.contains(&folder) {
            return Err(TextsepError::FolderNotFound(folder.to_string()));
        }
        self.store.attach_folder(&folder)?;
        self.page.select_folder(folder);
        Ok(())
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.page.set_page_size(PageSize::try_from(size)?);
        Ok(())
    }

    /// Jumps to `page` of the active folder, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) -> Result<usize> {
        let len = self.store.items(self.page.folder())?.len();
        Ok(self.page.go_to(page, len))
    }

    // --- Folders ---

    pub fn folders(&mut self) -> Result<CmdResult> {
        commands::folders::list(&mut self.folders)
    }

    pub fn create_folder(&mut self, label: &str) -> Result<CmdResult> {
        let result = commands::folders::create(&mut self.folders, label)?;
        for folder in &result.folders {
            self.store.attach_folder(&folder.id)?;
        }
        self.observe(Ok(result))
    }

    pub fn rename_folder(&mut self, id: &FolderId, label: &str) -> Result<CmdResult> {
        commands::folders::rename(&mut self.folders, id, label)
    }

    // --- Settings ---

    pub fn separator(&self) -> Result<CmdResult> {
        commands::separator::show(&self.backend)
    }

    pub fn set_separator(&mut self, separator: &str) -> Result<CmdResult> {
        commands::separator::set(&self.backend, separator)
    }

    /// Shows or changes `config.json`. A successful change also applies to
    /// the running session.
    pub fn config(&mut self, action: &commands::config::ConfigAction) -> Result<CmdResult> {
        let dir = self.config_dir()?.to_path_buf();
        let result = commands::config::run(&dir, action)?;
        if let Some(config) = &result.config {
            if config.items_per_page != self.config.items_per_page {
                self.page.set_page_size(config.items_per_page);
            }
            self.config = config.clone();
        }
        Ok(result)
    }

    fn config_dir(&self) -> Result<&Path> {
        self.config_dir
            .as_deref()
            .ok_or_else(|| TextsepError::Api("No configuration directory set".to_string()))
    }
}
