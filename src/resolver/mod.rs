//! Route descriptor to canonical line resolution.
//!
//! Strategies run in a fixed order and the first one that yields a line wins.
//! The order is a tie-break: a keyword in the long name beats a short name
//! that happens to match a different line.

use std::sync::Arc;
use tracing::{trace, warn};

use crate::{
    catalog::{Catalog, LineId},
    itinerary::Route,
    shared::{self, Identifiable},
};

type Strategy = fn(&Catalog, &Route) -> Option<LineId>;

const STRATEGIES: [(&str, Strategy); 5] = [
    ("keyword", by_keyword),
    ("catalog_name", by_catalog_name),
    ("operator_code", by_operator_code),
    ("numeric_code", by_numeric_code),
    ("short_name", by_short_name),
];

#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Canonical line for `route`, or `None` when no strategy matches.
    pub fn resolve(&self, route: &Route) -> Option<LineId> {
        let resolved = STRATEGIES.iter().find_map(|(name, strategy)| {
            let line = strategy(self.catalog.as_ref(), route)?;
            trace!("Route resolved to {line} by {name}");
            Some(line)
        });
        if resolved.is_none() {
            warn!("Could not match route: {route:?}");
        }
        resolved
    }
}

fn by_keyword(catalog: &Catalog, route: &Route) -> Option<LineId> {
    let long_name = shared::normalize(route.long_name.as_deref())?;
    catalog
        .keywords()
        .find(|(keyword, _)| long_name.contains(keyword))
        .map(|(_, line_id)| line_id.clone())
}

fn by_catalog_name(catalog: &Catalog, route: &Route) -> Option<LineId> {
    let long_name = shared::normalize(route.long_name.as_deref())?;
    catalog
        .lines()
        .iter()
        .find(|line| shared::contains_either(&long_name, line.normalized_name()))
        .map(|line| line.id.clone())
}

fn by_operator_code(catalog: &Catalog, route: &Route) -> Option<LineId> {
    let code = coded_suffix(route)?;
    if !has_operator_prefix(catalog, code) {
        return None;
    }
    catalog.line_by_railway_id(code).map(|line| line.id.clone())
}

fn by_numeric_code(catalog: &Catalog, route: &Route) -> Option<LineId> {
    let code = coded_suffix(route)?;
    if has_operator_prefix(catalog, code) {
        return None;
    }
    catalog.line_by_numeric_route(code).cloned()
}

fn by_short_name(catalog: &Catalog, route: &Route) -> Option<LineId> {
    let short_name = route.short_name.as_deref().map(str::trim)?;
    if short_name.is_empty() {
        return None;
    }
    catalog
        .lines()
        .iter()
        .find(|line| shared::contains_either(&line.name, short_name))
        .map(|line| line.id.clone())
}

/// Route part of a `feed:route` coded id. Ids without a separator carry no
/// route part.
fn coded_suffix(route: &Route) -> Option<&str> {
    let (_, suffix) = route.gtfs_id.as_deref()?.trim().rsplit_once(':')?;
    if suffix.is_empty() { None } else { Some(suffix) }
}

fn has_operator_prefix(catalog: &Catalog, code: &str) -> bool {
    catalog
        .operator_prefixes()
        .any(|prefix| code.starts_with(prefix))
}

#[test]
fn coded_suffix_takes_last_part() {
    let route = Route {
        gtfs_id: Some("odpt:Railway:JR-East.Yokohama".into()),
        ..Default::default()
    };
    assert_eq!(coded_suffix(&route), Some("JR-East.Yokohama"));

    let route = Route {
        gtfs_id: Some("11".into()),
        ..Default::default()
    };
    assert_eq!(coded_suffix(&route), None);
}
