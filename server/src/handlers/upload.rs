//! `POST /upload`: bind form fields, answer with the bound record and render
//! it.
//!
//! The binder is picked from the `Content-Type`: multipart and URL-encoded
//! bodies are both accepted, and query-string fields are bound first so a
//! body value for the same name replaces them. A request without a content
//! type binds from the query string alone.
//!
//! The render runs on the blocking pool and is awaited before the response
//! is returned, but its outcome is only logged: a client gets the same 200
//! whether or not the document could be written.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Query, Request, State},
    http::{header, HeaderMap},
    Form,
};
use docket_core::{bind_document, DocumentRecord, DocumentRenderer};
use tracing::{debug, error, info};

use crate::error::HttpError;
use crate::AppState;

type FormPairs = Vec<(String, String)>;

#[derive(Debug, PartialEq, Eq)]
enum FormEncoding {
    Multipart,
    UrlEncoded,
    QueryOnly,
    Unsupported(String),
}

pub async fn upload(
    State(state): State<AppState>,
    request: Request,
) -> Result<String, HttpError> {
    let Query(mut fields) = Query::<FormPairs>::try_from_uri(request.uri())?;

    let encoding = form_encoding(request.headers());
    debug!(?encoding, query_fields = fields.len(), "binding document upload");
    match encoding {
        FormEncoding::Multipart => {
            let multipart = Multipart::from_request(request, &state).await?;
            fields.extend(multipart_fields(multipart).await?);
        }
        FormEncoding::UrlEncoded => {
            let Form(pairs) = Form::<FormPairs>::from_request(request, &state).await?;
            fields.extend(pairs);
        }
        FormEncoding::QueryOnly => {}
        FormEncoding::Unsupported(content_type) => {
            return Err(HttpError::UnsupportedContentType(content_type));
        }
    }

    let record = bind_document(fields)?;
    info!(document_id = record.id, kind = %record.kind, "accepted document upload");

    let dump = record.to_string();
    render_document(Arc::clone(&state.renderer), record).await;
    Ok(dump)
}

fn form_encoding(headers: &HeaderMap) -> FormEncoding {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return FormEncoding::QueryOnly;
    };
    let raw = String::from_utf8_lossy(value.as_bytes());
    let essence = raw.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case("multipart/form-data") {
        FormEncoding::Multipart
    } else if essence.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        FormEncoding::UrlEncoded
    } else {
        FormEncoding::Unsupported(raw.into_owned())
    }
}

async fn multipart_fields(mut multipart: Multipart) -> Result<FormPairs, HttpError> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        // File parts carry no document fields.
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await?;
        fields.push((name, value));
    }
    Ok(fields)
}

async fn render_document(renderer: Arc<DocumentRenderer>, record: DocumentRecord) {
    let document_id = record.id;
    match tokio::task::spawn_blocking(move || renderer.render(&record)).await {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => error!(document_id, error = %err, "document render failed"),
        Err(err) => error!(document_id, error = %err, "document render task failed"),
    }
}
