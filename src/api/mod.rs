use crate::services::country::CountryService;
use crate::services::device::FixedLocation;
use crate::utils::http::HttpClient;
use axum::{http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod countries;
pub mod current;

pub struct AppState<H> {
    pub country_service: Arc<CountryService<H>>,
    pub location: FixedLocation,
}

impl<H> Clone for AppState<H> {
    fn clone(&self) -> Self {
        Self {
            country_service: self.country_service.clone(),
            location: self.location,
        }
    }
}

pub fn router<H>(app_state: AppState<H>) -> Router
where
    H: HttpClient + 'static,
{
    Router::new()
        .route("/countries", get(countries::get_countries::<H>))
        .route("/countries/{name}", get(countries::get_country::<H>))
        .route("/current", get(current::get_current_country::<H>))
        .route(
            "/health",
            get(|| async {
                (
                    StatusCode::OK,
                    Json(serde_json::json!({ "status": "healthy" })),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
