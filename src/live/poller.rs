use futures_util::future::join_all;
use std::collections::HashMap;
use tracing::{debug, error};

use super::{LivePosition, PositionSource, StatusSnapshot, TrainStatus};
use crate::{
    catalog::LineId,
    train::{TrainNumber, TrainRule},
};

/// Runs one poll cycle against a [`PositionSource`].
#[derive(Debug, Clone)]
pub struct StatusPoller<S> {
    source: S,
    rule: TrainRule,
}

impl<S> StatusPoller<S>
where
    S: PositionSource + Sync,
{
    pub fn new(source: S, rule: TrainRule) -> Self {
        Self { source, rule }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn rule(&self) -> &TrainRule {
        &self.rule
    }

    /// Queries every line and builds a fresh snapshot covering every watched
    /// train. Returns `None` without touching the network when there is
    /// nothing to watch.
    ///
    /// A line whose request fails is logged and skipped; its trains end up
    /// not running unless another line reported them.
    pub async fn poll(&self, lines: &[LineId], trains: &[TrainNumber]) -> Option<StatusSnapshot> {
        if lines.is_empty() || trains.is_empty() {
            return None;
        }

        let requests = lines.iter().map(|line| async move {
            let result = self.source.positions(line).await;
            (line, result)
        });
        let results = join_all(requests).await;

        let mut statuses: HashMap<TrainNumber, TrainStatus> = HashMap::with_capacity(trains.len());
        let mut failed_lines = Vec::new();
        for (line, result) in results {
            match result {
                Ok(positions) => {
                    debug!("{line} reported {} trains", positions.len());
                    for train in trains {
                        if let Some(found) = self.find(train, &positions) {
                            statuses.insert(train.clone(), TrainStatus::running(found));
                        }
                    }
                }
                Err(err) => {
                    error!("Failed to check train status for {line}: {err}");
                    failed_lines.push(line.clone());
                }
            }
        }

        for train in trains {
            statuses
                .entry(train.clone())
                .or_insert_with(TrainStatus::not_running);
        }

        Some(StatusSnapshot::new(statuses, failed_lines))
    }

    fn find<'a>(&self, train: &TrainNumber, positions: &'a [LivePosition]) -> Option<&'a LivePosition> {
        positions.iter().find(|position| {
            position
                .train_number
                .as_deref()
                .is_some_and(|number| train.matches(number, &self.rule))
        })
    }
}
