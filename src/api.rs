use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

/// Shared handler state. The pool is reserved for the blob-store backend and
/// is not exercised by any current route.
#[derive(Clone)]
pub struct AppState {
    pub blob_pool: Option<PgPool>,
}

/// Lazily configures the Postgres pool from `DATABASE_URL`. No connection is
/// attempted until a query runs, and nothing queries it yet.
pub fn blob_pool(config: &Config) -> Option<PgPool> {
    let url = config.database_url.as_deref()?;
    match PgPoolOptions::new().max_connections(5).connect_lazy(url) {
        Ok(pool) => Some(pool),
        Err(err) => {
            warn!(%err, "invalid DATABASE_URL, blob pool disabled");
            None
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/blob", get(get_blob))
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request")]
    MissingKey,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingKey => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}

#[derive(Deserialize)]
struct BlobParams {
    key: Option<String>,
}

#[derive(Serialize)]
struct BlobResponse {
    blob: Option<serde_json::Value>,
}

/// Blob lookup stub: a missing or empty key is a 400, any present key
/// resolves to a null blob.
async fn get_blob(
    State(_state): State<AppState>,
    Query(params): Query<BlobParams>,
) -> Result<Json<BlobResponse>, ApiError> {
    let key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or(ApiError::MissingKey)?;

    debug!(%key, "blob lookup");
    Ok(Json(BlobResponse { blob: None }))
}
