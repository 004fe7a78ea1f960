use std::path::{Path, PathBuf};

use crate::foundation::error::{CardError, CardResult};

/// Default cricketdata.org API root.
pub const DEFAULT_BASE_URL: &str = "https://api.cricketdata.org/v1";
/// Default asset root, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";
/// Default card location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output/ipl_match.png";

/// Connection settings for the match feed.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// API root without a trailing `/matches`.
    pub base_url: String,
    /// Credential sent as the `apikey` query parameter.
    pub api_key: String,
}

impl ApiConfig {
    /// Build a config against the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API root (tests point this at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(CardError::config("api key must be non-empty"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CardError::config(format!(
                "base url must be http(s), got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Listing endpoint; the credential is attached as a query pair by the client.
    pub fn matches_endpoint(&self) -> String {
        format!("{}/matches", self.base_url.trim_end_matches('/'))
    }

    /// Listing URL safe to put in logs and errors.
    pub fn redacted_matches_url(&self) -> String {
        format!("{}?apikey=***", self.matches_endpoint())
    }
}

/// On-disk layout of the font, backgrounds and team logos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    pub font: PathBuf,
    pub background_live: PathBuf,
    pub background_upcoming: PathBuf,
    pub logo_dir: PathBuf,
}

impl AssetPaths {
    /// Standard layout below `root`:
    ///
    /// ```text
    /// root/montserrat.ttf
    /// root/background_live.png
    /// root/background_upcoming.png
    /// root/ipl_logos/<team_name>.png
    /// ```
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            font: root.join("montserrat.ttf"),
            background_live: root.join("background_live.png"),
            background_upcoming: root.join("background_upcoming.png"),
            logo_dir: root.join("ipl_logos"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::under(DEFAULT_ASSETS_DIR)
    }
}

/// Everything a single run needs besides the feed itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub assets: AssetPaths,
    /// PNG destination; overwritten on every run.
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            assets: AssetPaths::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
