use crate::config::Config;
use crate::models::country::{CountryDetail, CountrySummary, CurrentCountryDetail};
use crate::services::device::{AlwaysOnline, ConnectivityChecker, LocationProvider};
use crate::services::parser::{self, ParseError};
use crate::utils::http::{HttpClient, HttpError};
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

const SUMMARY_FIELDS: &str = "fields=name,flags,currencies";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("No country matches {0}")]
    EmptyResult(String),
    #[error("Device is offline")]
    Offline,
    #[error("Current location is unavailable")]
    LocationUnavailable,
    #[error("Cannot build request URL from {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(ParseError::from(err))
    }
}

/// Retrieval façade over the country-data and reverse-geocoding services.
///
/// The `fetch_*` operations never fail: every [`FetchError`] is logged and
/// collapsed into `None` or an empty list. The `try_fetch_*` twins expose the
/// underlying error instead.
pub struct CountryService<H> {
    http: H,
    country_data_url: Url,
    geocode_url: Url,
    connectivity: Arc<dyn ConnectivityChecker>,
}

impl<H: HttpClient> CountryService<H> {
    pub fn new(http: H, country_data_url: Url, geocode_url: Url) -> Self {
        Self {
            http,
            country_data_url,
            geocode_url,
            connectivity: Arc::new(AlwaysOnline),
        }
    }

    pub fn from_config(http: H, config: &Config) -> Self {
        Self::new(
            http,
            config.country_data_url.clone(),
            config.geocode_url.clone(),
        )
    }

    pub fn with_connectivity<C>(mut self, checker: C) -> Self
    where
        C: ConnectivityChecker + 'static,
    {
        self.connectivity = Arc::new(checker);
        self
    }

    pub async fn fetch_country_detail(&self, common_name: &str) -> Option<CountryDetail> {
        match self.try_fetch_country_detail(common_name).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("Failed to fetch country detail for {}: {}", common_name, e);
                None
            }
        }
    }

    pub async fn fetch_countries(&self) -> Vec<CountrySummary> {
        match self.try_fetch_countries().await {
            Ok(countries) => countries,
            Err(e) => {
                warn!("Failed to fetch country list: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_current_country(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Option<CurrentCountryDetail> {
        match self.try_fetch_current_country(latitude, longitude).await {
            Ok(current) => Some(current),
            Err(e) => {
                warn!(
                    "Failed to fetch current country at ({}, {}): {}",
                    latitude, longitude, e
                );
                None
            }
        }
    }

    pub async fn fetch_country_at_current_location<L>(
        &self,
        provider: &L,
    ) -> Option<CurrentCountryDetail>
    where
        L: LocationProvider,
    {
        match self.try_fetch_country_at_current_location(provider).await {
            Ok(current) => Some(current),
            Err(e) => {
                warn!("Failed to fetch country at current location: {}", e);
                None
            }
        }
    }

    pub async fn try_fetch_country_detail(
        &self,
        common_name: &str,
    ) -> Result<CountryDetail, FetchError> {
        let mut url = endpoint(&self.country_data_url, &["v3.1", "name", common_name])?;
        url.set_query(Some("fullText=true"));

        let body = self.get(&url).await?;
        let country = first_country(&body, common_name)?;

        Ok(parser::parse_detail_value(country)?)
    }

    pub async fn try_fetch_countries(&self) -> Result<Vec<CountrySummary>, FetchError> {
        let mut url = endpoint(&self.country_data_url, &["v3.1", "all"])?;
        url.set_query(Some(SUMMARY_FIELDS));

        let body = self.get(&url).await?;
        let countries = parser::parse_summaries(&body)?;

        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    /// Resolves the country name through the geocoding service, then looks
    /// that name up without the full-text constraint. A failed first request
    /// short-circuits the second.
    pub async fn try_fetch_current_country(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentCountryDetail, FetchError> {
        let mut url = endpoint(&self.geocode_url, &["data", "reverse-geocode-client"])?;
        url.set_query(Some(&format!(
            "latitude={}&longitude={}&localityLanguage=en",
            latitude, longitude
        )));

        let body = self.get(&url).await?;
        let country_name = parser::extract_country_name(&body)?;
        debug!(
            "Coordinates ({}, {}) resolved to {}",
            latitude, longitude, country_name
        );

        let url = endpoint(&self.country_data_url, &["v3.1", "name", &country_name])?;
        let body = self.get(&url).await?;
        let country = first_country(&body, &country_name)?;

        Ok(parser::parse_current_value(country)?)
    }

    pub async fn try_fetch_country_at_current_location<L>(
        &self,
        provider: &L,
    ) -> Result<CurrentCountryDetail, FetchError>
    where
        L: LocationProvider,
    {
        let coordinates = provider
            .current()
            .await
            .ok_or(FetchError::LocationUnavailable)?;

        self.try_fetch_current_country(coordinates.latitude, coordinates.longitude)
            .await
    }

    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        if !self.connectivity.is_online() {
            return Err(FetchError::Offline);
        }

        Ok(self.http.get(url.as_str()).await?)
    }
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn first_country(body: &str, name: &str) -> Result<Value, FetchError> {
    let countries: Vec<Value> = serde_json::from_str(body)?;

    countries
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::EmptyResult(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_name_as_one_segment() {
        let base = Url::parse("https://restcountries.com").unwrap();
        let url = endpoint(&base, &["v3.1", "name", "Bosnia and Herzegovina"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/Bosnia%20and%20Herzegovina"
        );

        let url = endpoint(&base, &["v3.1", "name", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/name/a%2Fb");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://localhost:3000/proxy/").unwrap();
        let url = endpoint(&base, &["v3.1", "all"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/proxy/v3.1/all");
    }

    #[test]
    fn test_first_country() {
        assert!(matches!(
            first_country("[]", "Wakanda"),
            Err(FetchError::EmptyResult(name)) if name == "Wakanda"
        ));
        assert!(matches!(
            first_country(r#"{"status":404,"message":"Not Found"}"#, "Wakanda"),
            Err(FetchError::Parse(_))
        ));
        let first = first_country(r#"[{"id":1},{"id":2}]"#, "x").unwrap();
        assert_eq!(first["id"], 1);
    }
}
