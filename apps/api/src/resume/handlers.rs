use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resume::pdf::{extract_text_from_pdf, is_pdf_file};

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: Option<String>,
    pub page_count: usize,
    pub text: String,
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart upload with a `file` field and returns its plain text.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        if !is_pdf_file(file_name.as_deref(), content_type.as_deref()) {
            return Err(AppError::Validation("Please upload a PDF file".to_string()));
        }

        let bytes: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        info!("Extracting résumé text from {} byte upload", bytes.len());

        // pdf-extract is CPU-bound and may panic on hostile input.
        let extracted = tokio::task::spawn_blocking(move || extract_text_from_pdf(&bytes))
            .await
            .map_err(|e| {
                warn!("PDF extraction task aborted: {}", e);
                AppError::Validation("Failed to extract text from PDF".to_string())
            })??;

        return Ok(Json(ExtractResponse {
            file_name,
            page_count: extracted.page_count,
            text: extracted.text,
        }));
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in upload"
    )))
}
