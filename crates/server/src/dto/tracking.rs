use railsync::itinerary::{TrackedLeg, TrackedSet};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TrackingDto {
    pub lines: Vec<String>,
    pub trains: Vec<String>,
    pub transfers: usize,
    pub legs: Vec<LegDto>,
}

/// Per-leg view so the renderer can put a status next to each transit leg.
#[derive(Debug, Clone, Serialize)]
pub struct LegDto {
    pub index: usize,
    pub transit: bool,
    pub line: Option<String>,
    pub train: Option<String>,
}

impl LegDto {
    pub fn from(leg: &TrackedLeg) -> Self {
        Self {
            index: leg.index,
            transit: leg.transit,
            line: leg.line.as_ref().map(|line| line.to_string()),
            train: leg.train.as_ref().map(|train| train.to_string()),
        }
    }
}

impl TrackingDto {
    /// Built from what was resolved when tracking started. Nothing is
    /// resolved again per request.
    pub fn from(tracked: &TrackedSet) -> Self {
        Self {
            lines: tracked.lines.iter().map(|line| line.to_string()).collect(),
            trains: tracked.trains.iter().map(|train| train.to_string()).collect(),
            transfers: tracked.transfers,
            legs: tracked.legs.iter().map(LegDto::from).collect(),
        }
    }
}
