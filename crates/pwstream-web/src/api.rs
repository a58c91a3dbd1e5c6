//! REST API endpoint handlers.
//!
//! Each handler takes the window lock for one manager operation and answers
//! with JSON. Failures carry an `{"error": "..."}` body.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pwstream::format::group_thousands;
use pwstream::lookup::parse_positive_integer;
use pwstream::shared::{SharedWindow, jump, lookup, signal_proximity, with_window};
use pwstream::{FormatError, InputError};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::snapshot::WindowSnapshot;

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub window: SharedWindow,
}

/// Handler error, rendered as a status code plus JSON body.
#[derive(Debug)]
pub enum ApiError {
    BadInput(InputError),
    NotAPassword(FormatError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadInput(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotAPassword(e) => (StatusCode::NOT_FOUND, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn snapshot(window: &SharedWindow) -> Json<WindowSnapshot> {
    Json(with_window(window, WindowSnapshot::from_manager))
}

/// GET /api/window: Current window snapshot.
pub async fn get_window(State(app): State<AppState>) -> Json<WindowSnapshot> {
    snapshot(&app.window)
}

/// POST /api/more: proximity signal. Appends a batch, evicting past the cap.
pub async fn post_more(State(app): State<AppState>) -> Json<WindowSnapshot> {
    signal_proximity(&app.window);
    snapshot(&app.window)
}

/// Request body for POST /api/reset.
#[derive(Deserialize)]
pub struct ResetRequest {
    /// Decimal start index, as typed by the user.
    pub start: String,
}

/// POST /api/reset: Jump to a new start index.
///
/// Returns 400 if `start` is not a positive integer; the window is untouched.
pub async fn post_reset(
    State(app): State<AppState>,
    Json(body): Json<ResetRequest>,
) -> Result<Json<WindowSnapshot>, ApiError> {
    jump(&app.window, &body.start).map_err(ApiError::BadInput)?;
    Ok(snapshot(&app.window))
}

/// Request body for POST /api/lookup.
#[derive(Deserialize)]
pub struct LookupRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub index: String,
    pub formatted: String,
}

/// POST /api/lookup: Index of a password (surrounding whitespace ignored).
pub async fn post_lookup(
    State(app): State<AppState>,
    Json(body): Json<LookupRequest>,
) -> Result<Json<LookupResponse>, ApiError> {
    let index = lookup(&app.window, &body.password).map_err(ApiError::NotAPassword)?;
    Ok(Json(LookupResponse {
        formatted: group_thousands(index.value()),
        index: index.to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub index: String,
    pub password: String,
    /// Whether the index lies in the exact round-trip range.
    pub exact: bool,
}

/// GET /api/encode/{index}: Password at a decimal index.
pub async fn get_encode(
    State(app): State<AppState>,
    Path(text): Path<String>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let index = parse_positive_integer(&text).map_err(ApiError::BadInput)?;
    let (password, exact) = with_window(&app.window, |m| {
        (m.codec().encode(&index), m.codec().is_exact(&index))
    });
    Ok(Json(EncodeResponse {
        index: index.to_string(),
        password,
        exact,
    }))
}
