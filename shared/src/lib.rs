pub mod models {
    pub mod chart;
    pub mod contest;
}

pub mod cache;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod pagination;
pub mod source;
pub mod storage;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use cache::{CacheStats, ResponseCache, CONTEST_LIST_KEY};
pub use config::DashboardConfig;
pub use favorites::{FavoriteIds, FavoritesStore};
pub use filter::{distinct_values, filter_contests, FilterState};
pub use models::{
    chart::{BarChart, BarGeometry, DataPoint},
    contest::{Contest, ContestListResponse},
};
pub use pagination::{paginate, total_pages, Page, Pagination};
pub use source::{
    find_contest, ContestList, ContestLookup, ContestService, ContestSource, FetchOutcome,
};
pub use storage::{KeyValueStore, MemoryStorage};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contest::fixtures::alpha_beta;
    use pretty_assertions::assert_eq;

    /// Filter, then paginate, the way the dashboard renders a page
    #[test]
    fn test_filter_then_paginate() {
        let contests = alpha_beta();
        let favorites = FavoriteIds::new();
        let mut state = FilterState::with_page_size(1);

        let filtered = filter_contests(&contests, &state, &favorites);
        let page = state.pagination.apply(&filtered);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].name, "Alpha Cup");

        state.pagination.next(page.total_pages);
        let page = state.pagination.apply(&filtered);
        assert_eq!(page.items[0].name, "Beta Div");

        state.set_search("alpha");
        let filtered = filter_contests(&contests, &state, &favorites);
        let page = state.pagination.apply(&filtered);
        assert_eq!(state.pagination.page(), 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].id, 1);
    }

    #[test]
    fn test_favorites_feed_the_filter() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(storage, "favorites");
        store.toggle("1");

        let mut state = FilterState::default();
        state.set_favorites_only(true);
        let filtered = filter_contests(&alpha_beta(), &state, store.ids());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alpha Cup");
    }
}
