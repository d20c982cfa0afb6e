use railsync::{
    catalog::LineId,
    live::{self, LivePosition, PositionSource, PositionsResponse},
};
use reqwest::header::ACCEPT_ENCODING;
use std::{future::Future, time::Duration};

/// Live position backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeed {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn positions_url(&self, line: &LineId) -> String {
        format!("{}/api/trains/{}/positions/v4", self.base_url, line)
    }
}

impl PositionSource for HttpFeed {
    fn positions(
        &self,
        line: &LineId,
    ) -> impl Future<Output = Result<Vec<LivePosition>, live::Error>> + Send {
        let request = self
            .client
            .get(self.positions_url(line))
            .header(ACCEPT_ENCODING, "gzip, deflate");

        async move {
            let response = request
                .send()
                .await
                .map_err(|err| live::Error::Request(err.into()))?;

            if !response.status().is_success() {
                return Err(live::Error::Status(response.status().as_u16()));
            }

            let body: PositionsResponse = response
                .json()
                .await
                .map_err(|err| live::Error::Decode(err.to_string()))?;
            body.into_positions()
        }
    }
}

#[test]
fn positions_url_drops_trailing_slash() {
    let feed = HttpFeed::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
    assert_eq!(
        feed.positions_url(&LineId::new("chuo_rapid")),
        "http://localhost:8000/api/trains/chuo_rapid/positions/v4"
    );
}
