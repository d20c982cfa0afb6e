use railsync::{
    catalog::{Catalog, LineId},
    itinerary::Route,
    resolver::Resolver,
};
use std::sync::Arc;

fn resolver() -> Resolver {
    Resolver::new(Arc::new(Catalog::builtin()))
}

fn long_name(name: &str) -> Route {
    Route {
        long_name: Some(name.into()),
        ..Default::default()
    }
}

fn gtfs_id(id: &str) -> Route {
    Route {
        gtfs_id: Some(id.into()),
        ..Default::default()
    }
}

#[test]
fn keyword_in_long_name() {
    let line = resolver().resolve(&long_name("Chuo Rapid Line"));
    assert_eq!(line, Some(LineId::new("chuo_rapid")));
}

#[test]
fn keyword_order_prefers_longer_keyword() {
    let line = resolver().resolve(&long_name("Chuo-Sobu Local Line"));
    assert_eq!(line, Some(LineId::new("sobu_local")));
}

#[test]
fn negishi_maps_to_keihin_tohoku() {
    let line = resolver().resolve(&long_name("Negishi Line"));
    assert_eq!(line, Some(LineId::new("keihin_tohoku")));
}

#[test]
fn keyword_beats_short_name() {
    let route = Route {
        long_name: Some("Yamanote Line".into()),
        short_name: Some("横浜線".into()),
        ..Default::default()
    };
    assert_eq!(resolver().resolve(&route), Some(LineId::new("yamanote")));
}

#[test]
fn catalog_name_in_long_name() {
    let line = resolver().resolve(&long_name("JR 南武線"));
    assert_eq!(line, Some(LineId::new("nambu")));
}

#[test]
fn long_name_inside_catalog_name() {
    let line = resolver().resolve(&long_name("京浜東北線"));
    assert_eq!(line, Some(LineId::new("keihin_tohoku")));
}

#[test]
fn operator_code() {
    let line = resolver().resolve(&gtfs_id("odpt:Railway:JR-East.Yokohama"));
    assert_eq!(line, Some(LineId::new("yokohama")));
}

#[test]
fn operator_code_with_feed_prefix() {
    let line = resolver().resolve(&gtfs_id("1:JR-East.KeihinTohokuNegishi"));
    assert_eq!(line, Some(LineId::new("keihin_tohoku")));
}

#[test]
fn every_catalog_railway_id_resolves() {
    let resolver = resolver();
    for line in resolver.catalog().lines() {
        let route = gtfs_id(&format!("1:{}", line.railway_id));
        assert_eq!(resolver.resolve(&route).as_ref(), Some(&line.id));
    }
}

#[test]
fn unknown_operator_code_is_unresolved() {
    assert!(resolver().resolve(&gtfs_id("1:JR-East.Unknown")).is_none());
}

#[test]
fn numeric_code() {
    assert_eq!(
        resolver().resolve(&gtfs_id("1:21")),
        Some(LineId::new("yokohama"))
    );
    assert_eq!(
        resolver().resolve(&gtfs_id("1:11")),
        Some(LineId::new("chuo_rapid"))
    );
}

#[test]
fn bare_numeric_id_without_separator_is_unresolved() {
    assert!(resolver().resolve(&gtfs_id("11")).is_none());
}

#[test]
fn short_name() {
    let route = Route {
        short_name: Some("埼京線".into()),
        ..Default::default()
    };
    assert_eq!(resolver().resolve(&route), Some(LineId::new("saikyo")));
}

#[test]
fn short_name_contained_in_catalog_name() {
    let route = Route {
        short_name: Some("山手".into()),
        ..Default::default()
    };
    assert_eq!(resolver().resolve(&route), Some(LineId::new("yamanote")));
}

#[test]
fn coded_id_used_when_long_name_does_not_match() {
    let route = Route {
        long_name: Some("Tokyu Toyoko Line".into()),
        gtfs_id: Some("1:12".into()),
        ..Default::default()
    };
    assert_eq!(resolver().resolve(&route), Some(LineId::new("sobu_local")));
}

#[test]
fn empty_route_is_unresolved() {
    assert!(resolver().resolve(&Route::default()).is_none());
}

#[test]
fn blank_fields_are_ignored() {
    let route = Route {
        long_name: Some("  ".into()),
        short_name: Some("".into()),
        gtfs_id: Some("".into()),
        color: Some("80C241".into()),
    };
    assert!(resolver().resolve(&route).is_none());
}
