use serde::de::DeserializeOwned;
use store::ApiConfig;

use crate::error::FetchError;
use crate::models::{CasesTimeline, Country};

/// Read-only client for the disease.sh statistics API.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn historical_url(&self, lastdays: &str) -> String {
        format!("{}/historical/all?lastdays={lastdays}", self.base_url)
    }

    pub fn countries_url(&self) -> String {
        format!("{}/countries", self.base_url)
    }

    /// Worldwide cumulative series for the given `lastdays` window ("all" for everything).
    pub async fn historical_all(&self, lastdays: &str) -> Result<CasesTimeline, FetchError> {
        self.get_json(&self.historical_url(lastdays)).await
    }

    /// Current statistics for every country.
    pub async fn countries(&self) -> Result<Vec<Country>, FetchError> {
        self.get_json(&self.countries_url()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!("GET {url}");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {url} returned {status}");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let value: T = serde_json::from_str(&body).inspect_err(|e| {
            tracing::warn!("GET {url}: could not decode body: {e}");
        })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = StatsClient::new("https://disease.sh/v3/covid-19/");
        assert_eq!(client.base_url(), "https://disease.sh/v3/covid-19");
        assert_eq!(
            client.historical_url("all"),
            "https://disease.sh/v3/covid-19/historical/all?lastdays=all"
        );
        assert_eq!(client.countries_url(), "https://disease.sh/v3/covid-19/countries");
    }

    #[test]
    fn test_from_config() {
        let client = StatsClient::from_config(&ApiConfig::default());
        assert_eq!(client.base_url(), "https://disease.sh/v3/covid-19");
    }
}
