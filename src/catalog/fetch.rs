//! restcountries.com catalog client (feature `fetch`).
//!
//! One-shot fetch of the full country list. No retry, backoff, or
//! pagination: the engine caches the first successful result for the
//! lifetime of the process, so a failed fetch is simply surfaced and the
//! user retries the level.

use thiserror::Error;

use super::country::Country;

/// Endpoint restricted to the fields the quiz actually uses.
pub const REST_COUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,cca3,capital,region";

/// Why a catalog fetch failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog request returned status {0}")]
    Status(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Async client for the restcountries list endpoint.
pub struct RestCountriesClient {
    client: reqwest::Client,
    url: String,
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestCountriesClient {
    /// Client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(REST_COUNTRIES_URL)
    }

    /// Client against an alternate endpoint (tests, mirrors).
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetch and decode the country list.
    ///
    /// Records without a flag image are dropped; they can never be shown
    /// as a question subject or option.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "catalog fetch failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let countries: Vec<Country> =
            serde_json::from_str(&body).map_err(CatalogError::Decode)?;

        Ok(countries
            .into_iter()
            .filter(|c| !c.flags.png.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_catalog_body() {
        let body = r#"[
            {
                "name": { "common": "Spain", "official": "Kingdom of Spain" },
                "cca3": "ESP",
                "flags": { "png": "es.png", "svg": "es.svg" },
                "capital": ["Madrid"],
                "region": "Europe"
            },
            {
                "name": { "common": "Antarctica", "official": "Antarctica" },
                "cca3": "ATA",
                "flags": { "png": "aq.png", "svg": "aq.svg" },
                "region": "Antarctic"
            }
        ]"#;

        let countries: Vec<Country> = serde_json::from_str(body).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].code(), "ESP");
        assert!(!countries[1].has_capital());
    }
}
