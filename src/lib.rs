//! Countrysrv - country metadata from public country-data and geocoding APIs
//!
//! This library fetches country records from a country-data service,
//! optionally anchored to a position resolved by a reverse-geocoding service,
//! and normalizes them into immutable snapshots.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
