use railsync::catalog::Line;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDto {
    pub id: String,
    pub name: String,
    pub railway_id: String,
}

impl LineDto {
    pub fn from(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.to_string(),
            railway_id: line.railway_id.to_string(),
        }
    }
}
