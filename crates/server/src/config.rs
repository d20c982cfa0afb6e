use clap::Parser;
use railsync::{
    catalog::{self, Catalog},
    train::TrainRule,
};
use std::{path::PathBuf, time::Duration};

#[derive(Parser, Debug)]
#[command(name = "railsync-server")]
#[command(about = "Tracks live train status for a planned itinerary")]
pub struct Args {
    /// Port to run the HTTP server on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Base url of the live position backend
    #[arg(long, env = "FEED_URL", default_value = "http://localhost:8000")]
    pub feed_url: String,

    /// Directory with lines.csv, keywords.csv and numeric_routes.csv.
    /// The built-in JR East catalog is used when unset.
    #[arg(long, env = "CATALOG_DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Extra operator prefixes marking a coded route id as a railway id
    #[arg(long = "operator-prefix", env = "OPERATOR_PREFIXES", value_delimiter = ',')]
    pub operator_prefixes: Vec<String>,

    /// Seconds between poll cycles
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "5")]
    pub poll_interval_secs: u64,

    /// Seconds before a single live feed request is abandoned
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Keep only this many trailing digits of a train number when matching
    #[arg(long, env = "TRAIN_CORE_DIGITS")]
    pub train_core_digits: Option<usize>,
}

impl Args {
    pub fn catalog(&self) -> Result<Catalog, catalog::Error> {
        let mut config = catalog::Config::default();
        config
            .operator_prefixes
            .extend(self.operator_prefixes.iter().cloned());

        match &self.catalog_dir {
            Some(dir) => Catalog::from_dir(dir, &config),
            None => Ok(Catalog::builtin().with_operator_prefixes(&config.operator_prefixes)),
        }
    }

    pub fn train_rule(&self) -> TrainRule {
        TrainRule {
            core_digits: self.train_core_digits,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
