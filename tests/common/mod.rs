#![allow(dead_code)]

use countrysrv::services::country::CountryService;
use countrysrv::services::device::ConnectivityChecker;
use countrysrv::utils::http::{HttpClient, HttpError};
use reqwest::Url;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const FRANCE: &str = include_str!("../resources/france.json");
pub const SWITZERLAND: &str = include_str!("../resources/switzerland.json");
pub const ALL: &str = include_str!("../resources/all.json");
pub const REVERSE_GEOCODE: &str = include_str!("../resources/reverse_geocode.json");

pub const COUNTRY_DATA_URL: &str = "https://countries.test";
pub const GEOCODE_URL: &str = "https://geocode.test";

/// In-memory stand-in for the upstream services. Unknown URLs and URLs
/// registered with `fail` produce a transport error. Every request is
/// recorded.
#[derive(Clone, Default)]
pub struct FakeHttpClient {
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Some(body.to_string()));
        self
    }

    pub fn fail(self, url: &str) -> Self {
        self.responses.lock().unwrap().insert(url.to_string(), None);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpClient for FakeHttpClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        self.calls.lock().unwrap().push(url.to_string());

        let response = self.responses.lock().unwrap().get(url).cloned();
        match response {
            Some(Some(body)) => Ok(body),
            Some(None) => Err(HttpError::RequestFailed(format!("connection refused: {}", url))),
            None => Err(HttpError::RequestFailed(format!("no route for {}", url))),
        }
    }
}

pub struct Offline;

impl ConnectivityChecker for Offline {
    fn is_online(&self) -> bool {
        false
    }
}

pub fn service(http: FakeHttpClient) -> CountryService<FakeHttpClient> {
    CountryService::new(
        http,
        Url::parse(COUNTRY_DATA_URL).unwrap(),
        Url::parse(GEOCODE_URL).unwrap(),
    )
}
