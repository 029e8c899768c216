//! Errors surfaced while turning a webhook into rescans, and how they are returned to clients.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    /// The webhook body could not be read or parsed.
    #[error("Invalid request body")]
    BadRequestBody(#[source] anyhow::Error),

    /// The media server could not be asked for its libraries.
    #[error("Failed to get libraries")]
    LibraryDiscoveryFailed(#[source] anyhow::Error),

    /// No library section has a location that the path falls under.
    #[error("No library found for path: {0}")]
    NoLibraryForPath(String),

    /// A single rescan call failed. Recorded per library, never returned by the pipeline itself.
    #[error("Failed to rescan library {library_id}")]
    RescanFailed {
        library_id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ResponseError for NotificationError {
    fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::BadRequestBody(_) | NotificationError::NoLibraryForPath(_) => {
                StatusCode::BAD_REQUEST
            }
            NotificationError::LibraryDiscoveryFailed(_) | NotificationError::RescanFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
