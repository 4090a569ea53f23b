use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contextual::Context;
use extra::ErrorResponse;
use notion::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tier::Tier;
use validation::Email;

use crate::AppState;

pub const PATH: &str = "/api/check-rank";

/// Record properties that may carry the tier, most specific first.
pub const TIER_PROPERTIES: [&str; 2] = ["Tier", "Rank"];

/// Largest request body read before giving up.
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseBody {
    pub tier: Tier,
}

#[derive(thiserror::Error, Debug)]
pub enum CheckRankError {
    #[error("Server configuration incomplete. Please contact support.")]
    Configuration,

    #[error("An unexpected error occurred. Please try again.")]
    UnreadableBody(#[source] contextual::Error<axum::Error>),

    #[error("An unexpected error occurred. Please try again.")]
    MalformedBody(#[source] contextual::Error<serde_json::Error>),

    #[error("Invalid email format")]
    MissingEmail,

    #[error("{0}")]
    InvalidEmail(&'static str),

    #[error("Unable to search database. Please try again.")]
    Upstream(#[source] QueryError),

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected(#[source] QueryError),

    #[error("Email not found in database. Please check and try again.")]
    NotFound,
}

/// Looks up the tier of the creator registered under `email`.
///
/// The body is read and parsed by hand rather than through `Json<_>` or
/// `Bytes`, so that a missing configuration is reported before anything
/// about the request (an oversized body included), and so that a missing
/// or non-string `email` gets its own message.
#[tracing::instrument(skip_all, ret)]
pub async fn handler(
    State(AppState { records }): State<AppState>,
    body: Body,
) -> Result<Json<ResponseBody>, CheckRankError> {
    let records = records.ok_or(CheckRankError::Configuration)?;

    let body = to_bytes(body, BODY_LIMIT)
        .await
        .context("read request body")
        .map_err(CheckRankError::UnreadableBody)?;
    let body = serde_json::from_slice::<Value>(&body)
        .context("parse request body")
        .map_err(CheckRankError::MalformedBody)?;

    let email = match body.get("email") {
        Some(Value::String(email)) if !email.is_empty() => email.clone(),
        _ => return Err(CheckRankError::MissingEmail),
    };
    let email = Email::try_from(email).map_err(CheckRankError::InvalidEmail)?;
    tracing::debug!(%email);

    let results = records.query_by_email(&email.lookup_key()).await?;
    tracing::info!(results = results.len());

    let record = results.first().ok_or(CheckRankError::NotFound)?;
    let tier = record
        .first_select(&TIER_PROPERTIES)
        .map(Tier::from)
        .unwrap_or_else(Tier::unknown);

    Ok(Json(ResponseBody { tier }))
}

impl From<QueryError> for CheckRankError {
    fn from(err: QueryError) -> Self {
        match err.is_status() {
            true => CheckRankError::Upstream(err),
            false => CheckRankError::Unexpected(err),
        }
    }
}

impl CheckRankError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckRankError::MissingEmail | CheckRankError::InvalidEmail(_) => {
                StatusCode::BAD_REQUEST
            }
            CheckRankError::NotFound => StatusCode::NOT_FOUND,
            CheckRankError::Configuration
            | CheckRankError::UnreadableBody(_)
            | CheckRankError::MalformedBody(_)
            | CheckRankError::Upstream(_)
            | CheckRankError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CheckRankError {
    fn into_response(self) -> Response {
        match &self {
            CheckRankError::MissingEmail
            | CheckRankError::InvalidEmail(_)
            | CheckRankError::NotFound => tracing::info!("{:?}", self),
            CheckRankError::Configuration => {
                tracing::warn!("notion api key or database id is not configured")
            }
            CheckRankError::UnreadableBody(_)
            | CheckRankError::MalformedBody(_)
            | CheckRankError::Upstream(_)
            | CheckRankError::Unexpected(_) => tracing::error!("{:?}", self),
        };

        (self.status_code(), Json(ErrorResponse::from(self))).into_response()
    }
}
