use std::{collections::HashMap, io, sync::Arc};
use thiserror::Error;

mod builtin;
mod config;
mod loader;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Duplicate line id: {0}")]
    DuplicateLine(String),
    #[error("{0} references unknown line: {1}")]
    UnknownLine(String, String),
}

/// Static line data the resolver works against.
///
/// Holds the supported lines, the ordered English keyword table, the
/// numeric route table and the operator prefixes that mark a coded route id
/// as carrying a railway id. Keyword order is significant: the first keyword
/// found in a long name wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lines: Box<[Line]>,
    keywords: Box<[(Arc<str>, LineId)]>,
    numeric_routes: Arc<HashMap<Arc<str>, LineId>>,
    operator_prefixes: Box<[Arc<str>]>,
    // Lookups
    line_lookup: Arc<HashMap<LineId, usize>>,
    railway_lookup: Arc<HashMap<Arc<str>, usize>>,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_lines<I>(mut self, lines: I) -> Result<Self, self::Error>
    where
        I: IntoIterator<Item = Line>,
    {
        let mut line_lookup = HashMap::new();
        let mut railway_lookup = HashMap::new();
        let mut values = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            if line_lookup.insert(line.id.clone(), i).is_some() {
                return Err(self::Error::DuplicateLine(line.id.to_string()));
            }
            railway_lookup.entry(line.railway_id.clone()).or_insert(i);
            values.push(line);
        }
        self.lines = values.into();
        self.line_lookup = line_lookup.into();
        self.railway_lookup = railway_lookup.into();
        Ok(self)
    }

    pub fn with_keywords<I, K, L>(mut self, keywords: I) -> Result<Self, self::Error>
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<str>,
        L: Into<LineId>,
    {
        let mut values = Vec::new();
        for (keyword, line_id) in keywords {
            let line_id = self.known_line(line_id.into(), keyword.as_ref())?;
            values.push((keyword.as_ref().to_lowercase().into(), line_id));
        }
        self.keywords = values.into();
        Ok(self)
    }

    pub fn with_numeric_routes<I, K, L>(mut self, routes: I) -> Result<Self, self::Error>
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<str>,
        L: Into<LineId>,
    {
        let mut values = HashMap::new();
        for (route_id, line_id) in routes {
            let line_id = self.known_line(line_id.into(), route_id.as_ref())?;
            values.insert(route_id.as_ref().into(), line_id);
        }
        self.numeric_routes = values.into();
        Ok(self)
    }

    pub fn with_operator_prefixes<I, P>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        self.operator_prefixes = prefixes
            .into_iter()
            .map(|prefix| prefix.as_ref().into())
            .collect();
        self
    }

    fn known_line(&self, line_id: LineId, referenced_by: &str) -> Result<LineId, self::Error> {
        if self.line_lookup.contains_key(&line_id) {
            Ok(line_id)
        } else {
            Err(self::Error::UnknownLine(
                referenced_by.to_string(),
                line_id.to_string(),
            ))
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &LineId)> {
        self.keywords
            .iter()
            .map(|(keyword, line_id)| (keyword.as_ref(), line_id))
    }

    pub fn operator_prefixes(&self) -> impl Iterator<Item = &str> {
        self.operator_prefixes.iter().map(|prefix| prefix.as_ref())
    }

    pub fn line_by_id(&self, id: &LineId) -> Option<&Line> {
        let index = *self.line_lookup.get(id)?;
        Some(&self.lines[index])
    }

    pub fn line_by_railway_id(&self, railway_id: &str) -> Option<&Line> {
        let index = *self.railway_lookup.get(railway_id)?;
        Some(&self.lines[index])
    }

    pub fn line_by_numeric_route(&self, route_id: &str) -> Option<&LineId> {
        self.numeric_routes.get(route_id)
    }
}

#[test]
fn duplicate_line_is_rejected() {
    let result = Catalog::new().with_lines([
        Line::new("yamanote", "山手線", "JR-East.Yamanote"),
        Line::new("yamanote", "山手線", "JR-East.Yamanote"),
    ]);
    assert!(matches!(result, Err(Error::DuplicateLine(_))));
}

#[test]
fn keyword_for_unknown_line_is_rejected() {
    let result = Catalog::new()
        .with_lines([Line::new("yamanote", "山手線", "JR-East.Yamanote")])
        .and_then(|catalog| catalog.with_keywords([("nambu", "nambu")]));
    assert!(matches!(result, Err(Error::UnknownLine(_, _))));
}
