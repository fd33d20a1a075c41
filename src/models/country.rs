use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// Lightweight country record used for list display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub common_name: String,
    pub official_name: String,
    pub flag_image_url: String,
    pub currencies: BTreeMap<String, Currency>,
}

/// Full country record. `borders` holds ISO-3166 alpha-3 codes exactly as
/// the country-data service returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetail {
    pub common_name: String,
    pub official_name: String,
    pub region: String,
    pub subregion: String,
    pub languages: BTreeMap<String, String>,
    pub currencies: BTreeMap<String, Currency>,
    pub timezones: Vec<String>,
    pub google_maps_link: String,
    pub flag_image_url: String,
    pub borders: Vec<String>,
}

/// Reduced country record resolved from a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCountryDetail {
    pub name: String,
    pub primary_currency_name: String,
    pub primary_currency_symbol: String,
    pub borders: Vec<String>,
    pub flag_image_url: String,
    pub languages_joined: String,
}
