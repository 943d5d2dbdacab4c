use crate::favorites::FavoriteIds;
use crate::models::contest::Contest;
use crate::pagination::Pagination;
use std::collections::BTreeSet;

/// Filter and pagination state of one dashboard session.
///
/// Every setter that changes a filter dimension sends the view back to the
/// first page.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub type_filter: Option<String>,
    pub phase_filter: Option<String>,
    pub favorites_only: bool,
    pub pagination: Pagination,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_page_size(Pagination::DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            type_filter: None,
            phase_filter: None,
            favorites_only: false,
            pagination: Pagination::new(page_size),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.pagination.reset();
    }

    pub fn set_type_filter(&mut self, type_filter: Option<String>) {
        self.type_filter = type_filter;
        self.pagination.reset();
    }

    pub fn set_phase_filter(&mut self, phase_filter: Option<String>) {
        self.phase_filter = phase_filter;
        self.pagination.reset();
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.favorites_only = favorites_only;
        self.pagination.reset();
    }

    /// Clears every filter dimension, keeping the page size.
    pub fn clear(&mut self) {
        *self = Self::with_page_size(self.pagination.page_size());
    }

    /// Number of filters currently narrowing the list
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.type_filter.is_some(),
            self.phase_filter.is_some(),
            self.favorites_only,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Whether a single contest passes every active filter
    pub fn matches(&self, contest: &Contest, favorites: &FavoriteIds) -> bool {
        if let Some(contest_type) = &self.type_filter {
            if &contest.contest_type != contest_type {
                return false;
            }
        }
        if let Some(phase) = &self.phase_filter {
            if &contest.phase != phase {
                return false;
            }
        }
        if !self.search.is_empty()
            && !contest
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if self.favorites_only && !favorites.contains(&contest.key()) {
            return false;
        }
        true
    }
}

/// Stable filter over the contest list; order of the input is preserved.
pub fn filter_contests(
    contests: &[Contest],
    state: &FilterState,
    favorites: &FavoriteIds,
) -> Vec<Contest> {
    contests
        .iter()
        .filter(|contest| state.matches(contest, favorites))
        .cloned()
        .collect()
}

/// Distinct values of a categorical field, sorted, for building filter options
pub fn distinct_values<F>(contests: &[Contest], field: F) -> Vec<String>
where
    F: Fn(&Contest) -> &str,
{
    contests
        .iter()
        .map(|contest| field(contest).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
