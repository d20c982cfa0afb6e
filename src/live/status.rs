use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::LivePosition;
use crate::{catalog::LineId, train::TrainNumber};

const MODERATE_DELAY_MINUTES: i32 = 5;
const SEVERE_DELAY_MINUTES: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainState {
    /// Running and still at its origin station.
    Starting,
    Running,
    /// No live record matched this cycle.
    Undetected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DelaySeverity {
    OnTime,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainStatus {
    pub running: bool,
    pub status: Option<String>,
    /// Seconds behind schedule, 0 when the feed did not say.
    pub delay: i32,
    pub is_starting: bool,
}

impl TrainStatus {
    pub fn not_running() -> Self {
        Default::default()
    }

    pub fn running(position: &LivePosition) -> Self {
        Self {
            running: true,
            status: position.status.clone(),
            delay: position.delay.unwrap_or(0),
            is_starting: position.is_starting_station.unwrap_or(false),
        }
    }

    pub fn state(&self) -> TrainState {
        match (self.running, self.is_starting) {
            (false, _) => TrainState::Undetected,
            (true, true) => TrainState::Starting,
            (true, false) => TrainState::Running,
        }
    }

    /// Whole minutes of delay, rounded down.
    pub fn delay_minutes(&self) -> i32 {
        self.delay.div_euclid(60)
    }

    pub fn severity(&self) -> DelaySeverity {
        if !self.running {
            return DelaySeverity::OnTime;
        }
        match self.delay_minutes() {
            m if m >= SEVERE_DELAY_MINUTES => DelaySeverity::Severe,
            m if m >= MODERATE_DELAY_MINUTES => DelaySeverity::Moderate,
            _ => DelaySeverity::OnTime,
        }
    }
}

/// Result of one poll cycle. Never patched, only replaced by the next one.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub polled_at: DateTime<Utc>,
    pub failed_lines: Vec<LineId>,
    statuses: HashMap<TrainNumber, TrainStatus>,
}

impl StatusSnapshot {
    pub fn new(statuses: HashMap<TrainNumber, TrainStatus>, failed_lines: Vec<LineId>) -> Self {
        Self {
            polled_at: Utc::now(),
            failed_lines,
            statuses,
        }
    }

    pub fn get(&self, train: &TrainNumber) -> Option<&TrainStatus> {
        self.statuses.get(train)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TrainNumber, &TrainStatus)> {
        self.statuses.iter()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn running_count(&self) -> usize {
        self.statuses.values().filter(|status| status.running).count()
    }
}

#[test]
fn delay_minutes_round_down() {
    let status = TrainStatus {
        running: true,
        delay: 299,
        ..Default::default()
    };
    assert_eq!(status.delay_minutes(), 4);
    assert_eq!(status.severity(), DelaySeverity::OnTime);
}

#[test]
fn severity_thresholds() {
    let moderate = TrainStatus {
        running: true,
        delay: 300,
        ..Default::default()
    };
    let severe = TrainStatus {
        running: true,
        delay: 600,
        ..Default::default()
    };
    assert_eq!(moderate.severity(), DelaySeverity::Moderate);
    assert_eq!(severe.severity(), DelaySeverity::Severe);
}

#[test]
fn not_running_is_undetected() {
    let status = TrainStatus::not_running();
    assert_eq!(status.state(), TrainState::Undetected);
    assert_eq!(status.severity(), DelaySeverity::OnTime);
}
