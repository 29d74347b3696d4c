use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the Politics and War GraphQL API.
///
/// Every upstream call can fail; callers in the war check cycle log these and skip the
/// affected alliance rather than aborting.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The queried alliance or nation does not exist.
    #[error("{kind} with ID {id} not found")]
    NotFound {
        /// Kind of record queried, e.g. "Alliance"
        kind: &'static str,
        /// The queried ID
        id: i64,
    },

    /// Connection, TLS or protocol failure before a response was received.
    #[error("Failed to reach Politics and War API: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request exceeded the configured per-call timeout.
    #[error("Politics and War API request timed out")]
    Timeout,

    /// The API answered with a non-success HTTP status.
    #[error("Politics and War API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The API answered with GraphQL errors, e.g. for an invalid API key.
    #[error("Politics and War API returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response body did not match the expected schema.
    #[error("Malformed Politics and War API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The response carried neither data nor errors.
    #[error("Politics and War API returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Transport(err)
        }
    }
}

impl UpstreamError {
    /// Whether the error indicates the credential was rejected rather than a transient failure.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::GraphQl(_) => true,
            Self::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

/// Converts upstream errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 502 Bad Gateway - For every other upstream failure
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to query Politics and War API".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
