use crate::api::AppState;
use crate::models::country::{CountryDetail, CountrySummary};
use crate::models::response::ApiResponse;
use crate::utils::http::HttpClient;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn get_countries<H: HttpClient>(
    State(app_state): State<AppState<H>>,
) -> Json<ApiResponse<Vec<CountrySummary>>> {
    let countries = app_state.country_service.fetch_countries().await;
    Json(ApiResponse::ok(countries))
}

pub async fn get_country<H: HttpClient>(
    State(app_state): State<AppState<H>>,
    Path(name): Path<String>,
) -> (StatusCode, Json<ApiResponse<CountryDetail>>) {
    match app_state.country_service.fetch_country_detail(&name).await {
        Some(detail) => (StatusCode::OK, Json(ApiResponse::ok(detail))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Country not found: {}", name))),
        ),
    }
}
