use chrono::{DateTime, Utc};
use railsync::live::{DelaySeverity, StatusSnapshot, TrainState, TrainStatus};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct StatusDto {
    pub polled_at: Option<DateTime<Utc>>,
    pub failed_lines: Vec<String>,
    pub trains: BTreeMap<String, TrainStatusDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainStatusDto {
    pub running: bool,
    pub status: Option<String>,
    pub delay: i32,
    pub is_starting: bool,
    pub state: TrainState,
    pub delay_minutes: i32,
    pub severity: DelaySeverity,
}

impl TrainStatusDto {
    pub fn from(status: &TrainStatus) -> Self {
        Self {
            running: status.running,
            status: status.status.clone(),
            delay: status.delay,
            is_starting: status.is_starting,
            state: status.state(),
            delay_minutes: status.delay_minutes(),
            severity: status.severity(),
        }
    }
}

impl StatusDto {
    /// Before the first cycle completes there is no snapshot and every field
    /// is empty.
    pub fn from(snapshot: Option<&StatusSnapshot>) -> Self {
        match snapshot {
            Some(snapshot) => Self {
                polled_at: Some(snapshot.polled_at),
                failed_lines: snapshot
                    .failed_lines
                    .iter()
                    .map(|line| line.to_string())
                    .collect(),
                trains: snapshot
                    .iter()
                    .map(|(train, status)| (train.to_string(), TrainStatusDto::from(status)))
                    .collect(),
            },
            None => Self {
                polled_at: None,
                failed_lines: Vec::new(),
                trains: BTreeMap::new(),
            },
        }
    }
}
