use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::shared::Identifiable;

/// Canonical internal key of a supported line, e.g. `chuo_rapid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Arc<str>);

impl LineId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LineId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: Arc<str>,
    #[serde(skip)]
    pub normalized_name: Arc<str>,
    /// Identifier the external operator uses for this line, e.g. `JR-East.Yokohama`.
    pub railway_id: Arc<str>,
}

impl Line {
    pub fn new(id: &str, name: &str, railway_id: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            normalized_name: name.to_lowercase().into(),
            railway_id: railway_id.into(),
        }
    }
}

impl Identifiable for Line {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatalogLine {
    pub id: String,
    pub name: String,
    pub railway_id: String,
}

impl From<CatalogLine> for Line {
    fn from(value: CatalogLine) -> Self {
        Line::new(&value.id, &value.name, &value.railway_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatalogKeyword {
    pub keyword: String,
    pub line_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatalogNumericRoute {
    pub route_id: String,
    pub line_id: String,
}

#[test]
fn line_id_is_a_plain_json_string() {
    let id: LineId = serde_json::from_str(r#""chuo_rapid""#).unwrap();
    assert_eq!(id, LineId::new("chuo_rapid"));
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""chuo_rapid""#);
}

#[test]
fn line_serializes_without_normalized_name() {
    let line = Line::new("yamanote", "山手線", "JR-East.Yamanote");
    let json = serde_json::to_value(&line).unwrap();
    assert_eq!(json["id"], "yamanote");
    assert_eq!(json["railway_id"], "JR-East.Yamanote");
    assert!(json.get("normalized_name").is_none());
}
