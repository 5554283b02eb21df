//! Page math for the active folder.
//!
//! [`paginate`] never clamps: asking for a page past the end (say after the
//! list shrank) yields an empty slice. [`PageState`] is where callers keep
//! the current page in range.

use crate::error::{Result, TextsepError};
use crate::model::FolderId;
use serde::{Deserialize, Serialize};

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Thirty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Thirty => 30,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TextsepError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            30 => Ok(PageSize::Thirty),
            other => Err(TextsepError::Validation(format!(
                "Items per page must be 10, 20 or 30 (got {})",
                other
            ))),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// `ceil(len / page_size)`, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// The slice shown on 1-based `page`. Out-of-range pages give an empty slice.
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Which folder is on screen and which page of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    folder: FolderId,
    current_page: usize,
    page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            folder: FolderId::Saved,
            current_page: 1,
            page_size,
        }
    }

    pub fn folder(&self) -> &FolderId {
        &self.folder
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Switching folders always starts at page 1.
    pub fn select_folder(&mut self, folder: FolderId) {
        self.folder = folder;
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into `1..=total_pages(len)`.
    pub fn go_to(&mut self, page: usize, len: usize) -> usize {
        let last = total_pages(len, self.page_size.get());
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size.get())
    }

    pub fn slice<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        paginate(list, self.current_page, self.page_size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(30, 20), 2);
    }

    #[test]
    fn pages_concatenate_back_to_the_list() {
        let list: Vec<usize> = (0..47).collect();
        for size in PageSize::ALL {
            let pages = total_pages(list.len(), size.get());
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&list, p, size.get()).iter().copied())
                .collect();
            assert_eq!(joined, list);
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let list = vec![1, 2, 3];
        assert!(paginate(&list, 2, 10).is_empty());
        assert!(paginate(&list, 0, 10).is_empty());
        assert_eq!(paginate(&list, 1, 2), &[1, 2]);
        assert_eq!(paginate(&list, 2, 2), &[3]);
    }

    #[test]
    fn page_size_accepts_only_fixed_values() {
        assert_eq!(PageSize::try_from(20).unwrap(), PageSize::Twenty);
        assert!(PageSize::try_from(15).is_err());
        assert_eq!(serde_json::to_string(&PageSize::Thirty).unwrap(), "30");
        assert!(serde_json::from_str::<PageSize>("25").is_err());
    }

    #[test]
    fn selecting_a_folder_resets_the_page() {
        let mut state = PageState::default();
        state.go_to(3, 50);
        assert_eq!(state.current_page(), 3);

        state.select_folder(FolderId::Removed);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.folder(), &FolderId::Removed);
    }

    #[test]
    fn go_to_clamps_into_range() {
        let mut state = PageState::new(PageSize::Twenty);
        assert_eq!(state.go_to(9, 45), 3);
        assert_eq!(state.go_to(0, 45), 1);
        assert_eq!(state.go_to(4, 0), 1);
    }

    #[test]
    fn changing_page_size_resets_the_page() {
        let mut state = PageState::default();
        state.go_to(2, 30);
        state.set_page_size(PageSize::Thirty);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(30), 1);
    }
}
