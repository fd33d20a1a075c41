//! Conversion of upstream JSON into country records.
//!
//! Values are copied verbatim. The only reconciliation performed is the one
//! the upstream schema requires: a missing `borders` list becomes empty and a
//! missing currency `symbol` becomes an empty string.

use crate::models::country::{CountryDetail, CountrySummary, Currency, CurrentCountryDetail};
use crate::models::upstream::{
    ReverseGeocode, UpstreamCountry, UpstreamCountrySummary, UpstreamCurrency,
    UpstreamCurrentCountry,
};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Country {0} has no currency")]
    NoCurrency(String),
}

fn convert_currencies(
    currencies: BTreeMap<String, UpstreamCurrency>,
) -> BTreeMap<String, Currency> {
    currencies
        .into_iter()
        .map(|(code, currency)| {
            (
                code,
                Currency {
                    name: currency.name,
                    symbol: currency.symbol,
                },
            )
        })
        .collect()
}

pub fn parse_detail(json: &str) -> Result<CountryDetail, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    parse_detail_value(value)
}

pub fn parse_detail_value(value: Value) -> Result<CountryDetail, ParseError> {
    let country: UpstreamCountry = serde_json::from_value(value)?;

    Ok(CountryDetail {
        common_name: country.name.common,
        official_name: country.name.official,
        region: country.region,
        subregion: country.subregion,
        languages: country.languages,
        currencies: convert_currencies(country.currencies),
        timezones: country.timezones,
        google_maps_link: country.maps.google_maps,
        flag_image_url: country.flags.png,
        borders: country.borders,
    })
}

/// Parses the restricted-field list response and sorts it by common name.
///
/// Names are ordered by UTF-16 code units, not by locale. One malformed
/// element fails the whole list.
pub fn parse_summaries(json: &str) -> Result<Vec<CountrySummary>, ParseError> {
    let countries: Vec<UpstreamCountrySummary> = serde_json::from_str(json)?;

    let mut summaries: Vec<CountrySummary> = countries
        .into_iter()
        .map(|country| CountrySummary {
            common_name: country.name.common,
            official_name: country.name.official,
            flag_image_url: country.flags.png,
            currencies: convert_currencies(country.currencies),
        })
        .collect();

    summaries.sort_by(|a, b| {
        a.common_name
            .encode_utf16()
            .cmp(b.common_name.encode_utf16())
    });

    Ok(summaries)
}

pub fn extract_country_name(json: &str) -> Result<String, ParseError> {
    let geocode: ReverseGeocode = serde_json::from_str(json)?;
    Ok(geocode.country_name)
}

/// Projects a full country object into the location-based record.
///
/// The primary currency is the first entry of the currency map in code order.
pub fn parse_current_value(value: Value) -> Result<CurrentCountryDetail, ParseError> {
    let country: UpstreamCurrentCountry = serde_json::from_value(value)?;

    let (_, currency) = country
        .currencies
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::NoCurrency(country.name.common.clone()))?;

    let languages_joined = country
        .languages
        .into_values()
        .collect::<Vec<_>>()
        .join(", ");

    Ok(CurrentCountryDetail {
        name: country.name.common,
        primary_currency_name: currency.name,
        primary_currency_symbol: currency.symbol,
        borders: country.borders,
        flag_image_url: country.flags.png,
        languages_joined,
    })
}
