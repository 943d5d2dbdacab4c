// Re-export all API modules
pub mod contests;

pub use contests::HttpContestSource;
