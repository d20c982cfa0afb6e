pub struct Config {
    pub lines_file_name: String,
    pub keywords_file_name: String,
    pub numeric_routes_file_name: String,
    pub operator_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lines_file_name: "lines.csv".into(),
            keywords_file_name: "keywords.csv".into(),
            numeric_routes_file_name: "numeric_routes.csv".into(),
            operator_prefixes: vec!["JR-East.".into()],
        }
    }
}
