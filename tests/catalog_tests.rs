use railsync::{
    catalog::{self, Catalog, LineId},
    itinerary::Route,
    resolver::Resolver,
};
use std::sync::Arc;

fn fixture(name: &str) -> String {
    format!("{}/tests/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn load_from_dir() {
    let config = catalog::Config::default();
    let catalog = Catalog::from_dir(fixture("catalog"), &config).unwrap();

    assert_eq!(catalog.lines().len(), 2);
    for line in catalog.lines() {
        if line.id.as_str().is_empty() {
            panic!("id should never be empty");
        }
        if line.railway_id.is_empty() {
            panic!("railway_id should never be empty");
        }
    }
    let keywords: Vec<_> = catalog.keywords().map(|(k, _)| k).collect();
    assert_eq!(keywords, vec!["yamanote", "toyoko"]);
    assert_eq!(
        catalog.line_by_numeric_route("10"),
        Some(&LineId::new("yamanote"))
    );
    assert_eq!(
        catalog
            .line_by_railway_id("Tokyu.Toyoko")
            .map(|line| line.id.as_str()),
        Some("tokyu_toyoko")
    );
}

#[test]
fn loaded_catalog_drives_the_resolver() {
    let config = catalog::Config {
        operator_prefixes: vec!["JR-East.".into(), "Tokyu.".into()],
        ..Default::default()
    };
    let catalog = Catalog::from_dir(fixture("catalog"), &config).unwrap();
    let resolver = Resolver::new(Arc::new(catalog));

    let route = Route {
        gtfs_id: Some("odpt:Railway:Tokyu.Toyoko".into()),
        ..Default::default()
    };
    assert_eq!(resolver.resolve(&route), Some(LineId::new("tokyu_toyoko")));

    let route = Route {
        long_name: Some("yamanote line (outer loop)".into()),
        ..Default::default()
    };
    assert_eq!(resolver.resolve(&route), Some(LineId::new("yamanote")));
}

#[test]
fn missing_dir_is_an_io_error() {
    let result = Catalog::from_dir(fixture("no_such_catalog"), &catalog::Config::default());
    assert!(matches!(result, Err(catalog::Error::Io(_))));
}

#[test]
fn keyword_for_unknown_line_fails_to_load() {
    let result = Catalog::from_dir(fixture("catalog_bad"), &catalog::Config::default());
    assert!(matches!(result, Err(catalog::Error::UnknownLine(_, _))));
}

#[test]
fn builtin_catalog_lookups() {
    let catalog = Catalog::builtin();
    let line = catalog.line_by_id(&LineId::new("chuo_rapid")).unwrap();
    assert_eq!(line.railway_id.as_ref(), "JR-East.ChuoRapid");
    assert!(catalog.line_by_id(&LineId::new("ginza")).is_none());
}
