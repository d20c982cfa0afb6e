use super::{Catalog, CatalogKeyword, CatalogLine, CatalogNumericRoute, Config, Line};
use csv::Reader;
use serde::de::DeserializeOwned;
use std::{io::Read, path::Path};
use tracing::{debug, info};

impl Catalog {
    /// Loads a catalog from a directory of CSV files named by `config`.
    /// A missing keywords or numeric routes file leaves that table empty,
    /// a missing lines file is an error.
    pub fn from_dir<P: AsRef<Path>>(dir: P, config: &Config) -> Result<Self, super::Error> {
        let dir = dir.as_ref();

        let mut lines: Vec<CatalogLine> = Vec::new();
        parse_csv(&mut lines, std::fs::File::open(dir.join(&config.lines_file_name))?)?;

        let mut keywords: Vec<CatalogKeyword> = Vec::new();
        let keywords_path = dir.join(&config.keywords_file_name);
        if keywords_path.exists() {
            parse_csv(&mut keywords, std::fs::File::open(keywords_path)?)?;
        } else {
            debug!("No keyword table in {}", dir.display());
        }

        let mut numeric_routes: Vec<CatalogNumericRoute> = Vec::new();
        let numeric_path = dir.join(&config.numeric_routes_file_name);
        if numeric_path.exists() {
            parse_csv(&mut numeric_routes, std::fs::File::open(numeric_path)?)?;
        } else {
            debug!("No numeric route table in {}", dir.display());
        }

        info!(
            "Loaded {} lines, {} keywords and {} numeric routes",
            lines.len(),
            keywords.len(),
            numeric_routes.len()
        );

        Catalog::new()
            .with_lines(lines.into_iter().map(Line::from))?
            .with_keywords(keywords.into_iter().map(|k| (k.keyword, k.line_id)))?
            .with_numeric_routes(numeric_routes.into_iter().map(|r| (r.route_id, r.line_id)))
            .map(|catalog| catalog.with_operator_prefixes(&config.operator_prefixes))
    }
}

fn parse_csv<R, T>(buf: &mut Vec<T>, reader: R) -> Result<(), super::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = Reader::from_reader(reader);
    for result in rdr.deserialize() {
        let record: T = result?;
        buf.push(record);
    }
    Ok(())
}
