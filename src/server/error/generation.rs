use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the external text-generation provider.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Request could not be sent or the response body could not be read.
    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("Generation provider returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Provider response had no generated text field.
    #[error("Generation provider response contained no generated text")]
    MissingText,

    /// Generated text is not a story of the expected shape.
    #[error("Generated text is not a valid story: {0}")]
    InvalidStory(String),
}

/// Converts provider failures into 502 Bad Gateway responses.
///
/// Details are logged at error level; the client only learns that generation failed.
impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                message: "Failed to generate story. Please try again.".to_string(),
            }),
        )
            .into_response()
    }
}
