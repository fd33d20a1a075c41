use crate::api::AppState;
use crate::models::country::CurrentCountryDetail;
use crate::models::response::ApiResponse;
use crate::utils::http::HttpClient;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

#[derive(serde::Deserialize)]
pub struct CurrentQueryParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Resolves the country at the given coordinates, or at the configured
/// location when the query carries none.
pub async fn get_current_country<H: HttpClient>(
    State(app_state): State<AppState<H>>,
    Query(params): Query<CurrentQueryParams>,
) -> (StatusCode, Json<ApiResponse<CurrentCountryDetail>>) {
    let current = match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => {
            app_state
                .country_service
                .fetch_current_country(latitude, longitude)
                .await
        }
        (None, None) => {
            app_state
                .country_service
                .fetch_country_at_current_location(&app_state.location)
                .await
        }
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    "latitude and longitude must be given together",
                )),
            );
        }
    };

    match current {
        Some(current) => (StatusCode::OK, Json(ApiResponse::ok(current))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Current country could not be determined")),
        ),
    }
}
