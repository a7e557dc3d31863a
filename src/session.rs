//! Browse state held by a front-end between user actions.

use crate::data::Recipe;
use crate::filter::ResultSet;

/// Number of recipes revealed per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The current result list and how much of it is on screen.
///
/// A search starts by showing one page and "show more" reveals one more page
/// each time. A random pick shows exactly its single recipe.
#[derive(Debug, Clone)]
pub struct BrowseSession<'a> {
    results: ResultSet<'a>,
    display_count: usize,
    page_size: usize,
}

impl<'a> BrowseSession<'a> {
    /// Starts browsing a fresh search result.
    pub fn from_results(results: ResultSet<'a>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            results,
            display_count: page_size,
            page_size,
        }
    }

    /// Starts browsing a single random pick.
    pub fn from_pick(recipe: &'a Recipe, page_size: usize) -> Self {
        Self {
            results: vec![recipe],
            display_count: 1,
            page_size: page_size.max(1),
        }
    }

    /// All recipes in the current result, visible or not.
    pub fn results(&self) -> &[&'a Recipe] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// The recipes currently on screen.
    pub fn visible(&self) -> &[&'a Recipe] {
        let end = self.display_count.min(self.results.len());
        &self.results[..end]
    }

    pub fn has_more(&self) -> bool {
        self.results.len() > self.display_count
    }

    /// Reveals one more page. Returns the newly visible recipes.
    pub fn show_more(&mut self) -> &[&'a Recipe] {
        let start = self.display_count.min(self.results.len());
        self.display_count = self.display_count.saturating_add(self.page_size);
        let end = self.display_count.min(self.results.len());
        &self.results[start..end]
    }
}
