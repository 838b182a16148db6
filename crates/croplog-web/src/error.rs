//! Error type and axum `IntoResponse` implementation.
//!
//! Data-layer failures never reach this type: handlers turn them into
//! notices on the rendered page. What is left is a page that could not be
//! rendered at all.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
  #[error("render error: {0}")]
  Render(String),
}

impl IntoResponse for WebError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "failed to render page");
    (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
  }
}
