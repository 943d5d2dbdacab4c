use serde::{Deserialize, Serialize};

/// Runtime configuration of the contest dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Endpoint returning the full contest list
    pub contest_list_url: String,
    /// Local storage key holding the favorites record
    pub favorites_key: String,
    pub default_page_size: usize,
    /// Choices offered by the items-per-page selector
    pub page_size_options: Vec<usize>,
    /// Upper bound on a single contest list request (in milliseconds)
    pub fetch_timeout_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            contest_list_url: "https://codeforces.com/api/contest.list".to_string(),
            favorites_key: "contest_dashboard.favorites".to_string(),
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            fetch_timeout_ms: 15_000,
        }
    }
}

impl DashboardConfig {
    /// Replaces the contest list endpoint, ignoring blank overrides
    pub fn with_contest_list_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.contest_list_url = url.trim().to_string();
        }
        self
    }
}
