//! Wire shapes of the country-data and reverse-geocoding services.
//!
//! Field names follow the upstream JSON exactly. Only the keys the parsers
//! consume are declared; everything else in a response is ignored.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct UpstreamName {
    pub common: String,
    pub official: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamCurrency {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamFlags {
    pub png: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamMaps {
    #[serde(rename = "googleMaps")]
    pub google_maps: String,
}

/// Full country object, as returned by `/v3.1/name/{name}`.
#[derive(Debug, Deserialize)]
pub struct UpstreamCountry {
    pub name: UpstreamName,
    pub region: String,
    pub subregion: String,
    pub languages: BTreeMap<String, String>,
    pub currencies: BTreeMap<String, UpstreamCurrency>,
    pub timezones: Vec<String>,
    pub maps: UpstreamMaps,
    pub flags: UpstreamFlags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
}

/// Projection served by `/v3.1/all?fields=name,flags,currencies`.
#[derive(Debug, Deserialize)]
pub struct UpstreamCountrySummary {
    pub name: UpstreamName,
    pub flags: UpstreamFlags,
    pub currencies: BTreeMap<String, UpstreamCurrency>,
}

/// Subset of a full country object needed for the location-based lookup.
#[derive(Debug, Deserialize)]
pub struct UpstreamCurrentCountry {
    pub name: UpstreamName,
    pub languages: BTreeMap<String, String>,
    pub currencies: BTreeMap<String, UpstreamCurrency>,
    pub flags: UpstreamFlags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReverseGeocode {
    #[serde(rename = "countryName")]
    pub country_name: String,
}
