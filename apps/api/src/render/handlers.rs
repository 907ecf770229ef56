use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::export::{render_export_document, ExportDocument};
use crate::render::screen::{render_screen_view, ScreenView};
use crate::state::AppState;

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreenView>, AppError> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(render_screen_view(&snapshot)))
}

/// GET /api/v1/sessions/:id/export
///
/// Returns the Word document as an attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(HeaderMap, Bytes), AppError> {
    let snapshot = state.sessions.snapshot(id).await?;
    let document = render_export_document(&snapshot);
    info!(
        "Exported session {id} as {} ({} bytes)",
        document.filename,
        document.body.len()
    );

    let headers = export_headers(&document)?;
    Ok((headers, document.body))
}

fn export_headers(document: &ExportDocument) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(document.content_type),
    );

    let disposition = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(&document.filename),
        percent_encode(&document.filename)
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).context("invalid Content-Disposition header")?,
    );
    Ok(headers)
}

/// Quoted-string safe ASCII version of the filename for clients that ignore `filename*`.
fn ascii_fallback(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// RFC 5987 `attr-char` encoding.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        let keep = byte.is_ascii_alphanumeric()
            || matches!(byte, b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~');
        if keep {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
