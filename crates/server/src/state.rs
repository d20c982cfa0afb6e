use crate::{feed::HttpFeed, tracker::Tracker};
use railsync::catalog::Catalog;
use std::sync::Arc;

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tracker: Tracker<HttpFeed>,
}
