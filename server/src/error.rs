//! HTTP-facing and startup errors.
//!
//! # Design
//! `HttpError` is the only error type handlers return. Its `IntoResponse`
//! impl fixes the wire shape of each failure: a JSON `message` for unknown
//! todos and a plain-text `err: ...` line for rejected uploads.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docket_core::{StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LoadError;

pub const TODO_NOT_FOUND: &str = "Todo not found";

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    MultipartRejected(#[from] MultipartRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::Store(StoreError::NotFound { id }) => {
                debug!(%id, "todo not found");
                let body = MessageBody {
                    message: TODO_NOT_FOUND,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            HttpError::Validation(err) => {
                warn!(fields = ?err.paths(), error = %err, "rejected document upload");
                (StatusCode::BAD_REQUEST, format!("err: {err}")).into_response()
            }
            HttpError::Multipart(err) => unreadable_form(err.status(), err.body_text()),
            HttpError::MultipartRejected(err) => unreadable_form(err.status(), err.body_text()),
            HttpError::Form(err) => unreadable_form(err.status(), err.body_text()),
            HttpError::Query(err) => unreadable_form(err.status(), err.body_text()),
            err @ HttpError::UnsupportedContentType(_) => {
                unreadable_form(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}

fn unreadable_form(status: StatusCode, detail: String) -> Response {
    warn!(status = status.as_u16(), error = %detail, "unreadable upload payload");
    (status, format!("err: {detail}")).into_response()
}

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
