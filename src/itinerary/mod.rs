//! Planner itinerary as it arrives from the trip-planning backend.
//!
//! Every field is optional. The planner omits whatever it does not know and
//! the tracker has to cope.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::{
    catalog::LineId,
    resolver::Resolver,
    train::{TrainNumber, TrainRule},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Walk,
    Transit(Arc<str>),
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("walk") {
            Mode::Walk
        } else {
            Mode::Transit(value.into())
        }
    }
}

impl From<Mode> for String {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Walk => "WALK".to_string(),
            Mode::Transit(mode) => mode.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    /// Composite coded id, `feed:route` (e.g. `1:11`, `odpt:Railway:JR-East.Yokohama`).
    pub gtfs_id: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Leg {
    pub mode: Option<Mode>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub duration_minutes: Option<u32>,
    pub route: Option<Route>,
    pub trip_id: Option<String>,
    pub from: Option<Place>,
    pub to: Option<Place>,
    pub headsign: Option<String>,
}

impl Leg {
    pub fn is_walk(&self) -> bool {
        matches!(self.mode, Some(Mode::Walk))
    }

    /// Anything that is not explicitly a walk counts as transit.
    pub fn is_transit(&self) -> bool {
        !self.is_walk()
    }

    /// Train this leg rides, if it is a transit leg with a usable trip id.
    pub fn train(&self, rule: &TrainRule) -> Option<TrainNumber> {
        if self.is_walk() {
            return None;
        }
        let trip_id = self.trip_id.as_deref()?;
        TrainNumber::extract(trip_id, rule)
    }

    /// Line this leg rides, if it is a transit leg with a resolvable route.
    pub fn line(&self, resolver: &Resolver) -> Option<LineId> {
        if self.is_walk() {
            return None;
        }
        resolver.resolve(self.route.as_ref()?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub duration_minutes: Option<u32>,
    pub fare: Option<Fare>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fare {
    /// Total in yen.
    pub total: Option<u32>,
}

impl Itinerary {
    pub fn transit_legs(&self) -> impl Iterator<Item = &Leg> {
        self.legs.iter().filter(|leg| leg.is_transit())
    }

    pub fn transfer_count(&self) -> usize {
        self.transit_legs().count().saturating_sub(1)
    }

    /// Lines and trains to watch for this itinerary, in leg order without
    /// duplicates. Legs that resolve to nothing are left out of the sets but
    /// keep their slot in `legs`.
    pub fn tracked(&self, resolver: &Resolver, rule: &TrainRule) -> TrackedSet {
        let mut tracked = TrackedSet {
            transfers: self.transfer_count(),
            ..Default::default()
        };
        for (index, leg) in self.legs.iter().enumerate() {
            let train = leg.train(rule);
            if let Some(train) = &train {
                debug!("Extracted train {train} from {:?}", leg.trip_id);
                if !tracked.trains.contains(train) {
                    tracked.trains.push(train.clone());
                }
            }
            let line = leg.line(resolver);
            if let Some(line) = &line {
                debug!("Extracted line {line} from {:?}", leg.route);
                if !tracked.lines.contains(line) {
                    tracked.lines.push(line.clone());
                }
            }
            tracked.legs.push(TrackedLeg {
                index,
                transit: leg.is_transit(),
                line,
                train,
            });
        }
        tracked
    }
}

/// Resolved identity of one leg, kept so the renderer can put a status next
/// to each transit leg.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedLeg {
    pub index: usize,
    pub transit: bool,
    pub line: Option<LineId>,
    pub train: Option<TrainNumber>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackedSet {
    pub lines: Vec<LineId>,
    pub trains: Vec<TrainNumber>,
    pub transfers: usize,
    pub legs: Vec<TrackedLeg>,
}

impl TrackedSet {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() || self.trains.is_empty()
    }
}
