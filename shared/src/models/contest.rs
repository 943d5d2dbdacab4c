use crate::{Result, SharedError};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Phase reported by the upstream API once a contest is over.
pub const PHASE_FINISHED: &str = "FINISHED";

/// Represents a contest as published by the upstream contest list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    /// Stable upstream identifier, used for routing and favorites
    pub id: i64,

    pub name: String,

    /// Contest format, e.g. "CF", "ICPC", "IOI"
    #[serde(rename = "type")]
    pub contest_type: String,

    /// Lifecycle state, e.g. "BEFORE", "CODING", "FINISHED"
    pub phase: String,

    pub duration_seconds: u64,

    /// Unix epoch seconds. Unscheduled contests omit it upstream and it
    /// defaults to 0, which `start_time` reads as "no start time".
    #[serde(default)]
    pub start_time_seconds: i64,
}

impl Contest {
    /// Identifier in the string form used by routes and the favorites record
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds as f64 / 3600.0
    }

    /// Duration formatted as hours with two decimals, e.g. "2.00 hours"
    pub fn duration_label(&self) -> String {
        format!("{:.2} hours", self.duration_hours())
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PHASE_FINISHED
    }

    /// Start time in UTC, `None` when the contest has no scheduled start.
    /// A `start_time_seconds` of 0 is the sentinel for an absent value.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        if self.start_time_seconds == 0 {
            return None;
        }
        DateTime::from_timestamp(self.start_time_seconds, 0)
    }
}

/// Envelope returned by the contest list endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct ContestListResponse {
    pub status: Option<String>,
    pub comment: Option<String>,
    pub result: Option<Vec<Contest>>,
}

impl ContestListResponse {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Validates the envelope and returns the contest list with unique ids,
    /// keeping upstream order.
    pub fn into_contests(self) -> Result<Vec<Contest>> {
        if let Some(status) = self.status.as_deref() {
            if status != "OK" {
                return Err(SharedError::Upstream(
                    self.comment.unwrap_or_else(|| status.to_string()),
                ));
            }
        }
        let contests = self.result.ok_or_else(|| {
            SharedError::MalformedResponse("missing `result` field".to_string())
        })?;
        Ok(dedup_by_id(contests))
    }
}

/// Drops later records that reuse an id already seen.
pub fn dedup_by_id(contests: Vec<Contest>) -> Vec<Contest> {
    let mut seen = HashSet::with_capacity(contests.len());
    let mut unique = Vec::with_capacity(contests.len());
    for contest in contests {
        if seen.insert(contest.id) {
            unique.push(contest);
        } else {
            warn!("Dropping duplicate contest id {}", contest.id);
        }
    }
    unique
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Contest;

    pub fn contest(id: i64, name: &str, contest_type: &str, phase: &str, duration: u64) -> Contest {
        Contest {
            id,
            name: name.to_string(),
            contest_type: contest_type.to_string(),
            phase: phase.to_string(),
            duration_seconds: duration,
            start_time_seconds: 1_700_000_000 + id,
        }
    }

    /// The two-contest list used across the pipeline tests
    pub fn alpha_beta() -> Vec<Contest> {
        vec![
            contest(1, "Alpha Cup", "CF", "FINISHED", 7200),
            contest(2, "Beta Div", "ICPC", "BEFORE", 3600),
        ]
    }
}
