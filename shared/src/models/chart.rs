use crate::models::contest::Contest;
use serde::{Deserialize, Serialize};

/// Space reserved below the bars for the baseline and bar labels
pub const LABEL_AREA: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Single-series bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub points: Vec<DataPoint>,
}

/// Position of one bar inside a `width` x `height` drawing area
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarChart {
    /// One bar per contest: name on the x axis, duration in hours as value
    pub fn contest_durations(contests: &[Contest]) -> Self {
        Self {
            title: "Contest Duration (hours)".to_string(),
            x_axis: "Contest Name".to_string(),
            y_axis: "Duration (hours)".to_string(),
            points: contests
                .iter()
                .map(|contest| DataPoint {
                    label: contest.name.clone(),
                    value: contest.duration_hours(),
                })
                .collect(),
        }
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// Lays the bars out left to right, scaled so the tallest bar takes 70%
    /// of the height. Bars are 80% of their slot, the rest is spacing.
    pub fn layout(&self, width: u32, height: u32) -> Vec<BarGeometry> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let slot = width as f64 / self.points.len() as f64;
        let bar_width = slot * 0.8;
        let max_value = self.max_value();
        let baseline = height as f64 - LABEL_AREA;

        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let bar_height = if max_value > 0.0 {
                    (point.value.max(0.0) / max_value) * (height as f64 * 0.7)
                } else {
                    0.0
                };
                BarGeometry {
                    x: i as f64 * slot,
                    y: baseline - bar_height,
                    width: bar_width,
                    height: bar_height,
                }
            })
            .collect()
    }
}
