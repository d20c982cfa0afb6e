use std::future::Future;
use thiserror::Error;

pub mod models;
mod poller;
mod status;
pub use models::*;
pub use poller::*;
pub use status::*;

use crate::catalog::LineId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Feed answered with status {0}")]
    Status(u16),
    #[error("Could not decode feed: {0}")]
    Decode(String),
    #[error("Feed reported an error: {0}")]
    Feed(String),
}

/// Live position backend, queried once per line per poll cycle.
pub trait PositionSource {
    fn positions(
        &self,
        line: &LineId,
    ) -> impl Future<Output = Result<Vec<LivePosition>, self::Error>> + Send;
}
