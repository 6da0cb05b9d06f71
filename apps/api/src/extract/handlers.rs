use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::parse_resume;
use crate::models::resume::ResumeRecord;
use crate::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload with a `file` field holding the PDF bytes. The document
/// is rendered to text, then run through the field extractors.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file_bytes = Some(bytes.to_vec());
        }
    }

    let file_bytes = file_bytes.ok_or_else(|| {
        AppError::Validation("Missing 'file' field in multipart upload".to_string())
    })?;

    let text = render::text_from_pdf(&file_bytes)?;
    Ok(Json(parse_resume(&text, &state.catalog)))
}

/// POST /api/v1/resumes/parse-text
///
/// Same pipeline minus the render step, for callers that already hold
/// plain text.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Json<ResumeRecord> {
    Json(parse_resume(&req.text, &state.catalog))
}
