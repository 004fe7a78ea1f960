use reqwest::blocking::Client;

use crate::api::model::{MatchWire, parse_match_list};
use crate::foundation::config::ApiConfig;
use crate::foundation::error::{CardError, CardResult};

/// Source of raw match listings.
///
/// [`CricketApi`] is the production implementation; tests can hand the pipeline a fixed list.
pub trait MatchFeed {
    /// Fetch the current match list, in the order the source reports it.
    fn fetch_matches(&self) -> CardResult<Vec<MatchWire>>;
}

impl MatchFeed for Vec<MatchWire> {
    fn fetch_matches(&self) -> CardResult<Vec<MatchWire>> {
        Ok(self.clone())
    }
}

/// Blocking client for the cricketdata.org `matches` endpoint.
pub struct CricketApi {
    client: Client,
    config: ApiConfig,
}

impl CricketApi {
    pub fn new(config: ApiConfig) -> CardResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .user_agent(concat!("cricket-card/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CardError::config(format!("build http client: {e}")))?;
        Ok(Self { client, config })
    }
}

impl MatchFeed for CricketApi {
    #[tracing::instrument(skip(self), fields(url = %self.config.redacted_matches_url()))]
    fn fetch_matches(&self) -> CardResult<Vec<MatchWire>> {
        let url = self.config.redacted_matches_url();
        let res = self
            .client
            .get(self.config.matches_endpoint())
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .map_err(|e| CardError::network(format!("GET {url}: {}", e.without_url())))?;

        let status = res.status();
        if !status.is_success() {
            return Err(CardError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = res
            .bytes()
            .map_err(|e| CardError::network(format!("read body of {url}: {}", e.without_url())))?;
        let matches = parse_match_list(&body)?;
        tracing::debug!(count = matches.len(), "fetched match list");
        Ok(matches)
    }
}
