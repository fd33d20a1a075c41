use crate::models::location::Coordinates;
use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use thiserror::Error;

pub const DEFAULT_COUNTRY_DATA_URL: &str = "https://restcountries.com";
pub const DEFAULT_GEOCODE_URL: &str = "https://api.bigdatacloud.net";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid URL in {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number in {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub country_data_url: Url,
    pub geocode_url: Url,
    pub default_location: Option<Coordinates>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_location = match (
            parse_optional_f64(&lookup, "DEFAULT_LATITUDE")?,
            parse_optional_f64(&lookup, "DEFAULT_LONGITUDE")?,
        ) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        };

        Ok(Self {
            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            country_data_url: parse_url(
                "COUNTRY_DATA_URL",
                lookup("COUNTRY_DATA_URL")
                    .unwrap_or_else(|| DEFAULT_COUNTRY_DATA_URL.to_string()),
            )?,
            geocode_url: parse_url(
                "GEOCODE_URL",
                lookup("GEOCODE_URL").unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string()),
            )?,
            default_location,
        })
    }
}

fn parse_url(name: &'static str, value: String) -> Result<Url, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(ConfigError::InvalidUrl { name, value }),
    }
}

fn parse_optional_f64<F>(lookup: &F, name: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.country_data_url.as_str(), "https://restcountries.com/");
        assert_eq!(config.geocode_url.as_str(), "https://api.bigdatacloud.net/");
        assert!(config.default_location.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "9000"),
            ("COUNTRY_DATA_URL", "http://localhost:3000/api"),
            ("DEFAULT_LATITUDE", "48.8566"),
            ("DEFAULT_LONGITUDE", "2.3522"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 9000);
        assert_eq!(config.country_data_url.as_str(), "http://localhost:3000/api");
        assert_eq!(
            config.default_location,
            Some(Coordinates::new(48.8566, 2.3522))
        );
    }

    #[test]
    fn test_location_needs_both_coordinates() {
        let config = Config::from_lookup(lookup_from(&[("DEFAULT_LATITUDE", "10.0")])).unwrap();
        assert!(config.default_location.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("GEOCODE_URL", "not a url")])),
            Err(ConfigError::InvalidUrl { name: "GEOCODE_URL", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("COUNTRY_DATA_URL", "mailto:someone@example.com")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("DEFAULT_LONGITUDE", "east")])),
            Err(ConfigError::InvalidNumber { name: "DEFAULT_LONGITUDE", .. })
        ));
    }
}
