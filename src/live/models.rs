use serde::{Deserialize, Serialize};

/// One train as reported by a line's live position feed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LivePosition {
    pub trip_id: Option<String>,
    pub train_number: Option<String>,
    pub direction: Option<String>,
    pub status: Option<String>,
    /// Seconds behind schedule.
    pub delay: Option<i32>,
    pub is_starting_station: Option<bool>,
}

/// Body of `/api/trains/{line_id}/positions/v4`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PositionsResponse {
    pub line_id: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub positions: Vec<LivePosition>,
}

impl PositionsResponse {
    /// Positions of a healthy response. A body that reports `status: "error"`
    /// is a failed line, even though it arrived with a success code.
    pub fn into_positions(self) -> Result<Vec<LivePosition>, super::Error> {
        if self.status.as_deref() == Some("error") {
            let reason = self.error.unwrap_or_else(|| "unknown".to_string());
            return Err(super::Error::Feed(reason));
        }
        Ok(self.positions)
    }
}
