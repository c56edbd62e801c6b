use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Json};

use crate::errors::IntakeError;
use crate::intake::download::fetch_document;
use crate::intake::scratch::save_to_scratch;
use crate::models::{IntakeRequest, IntakeResponse};
use crate::state::AppState;

const SUCCESS_MESSAGE: &str = "File processed successfully";

// Handles POST requests to /process-document.
//
// Arguments: the JSON intake payload ({ fileName, fileType, downloadUrl }) and the shared AppState.
// Returns: 200 with the intake acknowledgement as JSON.
//
// A missing or empty downloadUrl is answered with 400 { "error": "Missing download URL" }
// before any network or disk access. Every other failure is a 500 with no detail.
#[handler]
pub async fn process_document(
    Json(payload): Json<IntakeRequest>,
    state: Data<&Arc<AppState>>,
) -> poem::Result<Json<IntakeResponse>> {
    let response = intake_document(payload, &state).await?;
    Ok(Json(response))
}

// validate -> download -> write -> process. Stops at the first failure.
async fn intake_document(payload: IntakeRequest, state: &AppState) -> Result<IntakeResponse, IntakeError> {
    let download_url = payload.download_url().ok_or(IntakeError::MissingDownloadUrl)?;
    let file_name = payload.file_name.as_deref().ok_or(IntakeError::MissingFileName)?;

    let content = fetch_document(&state.client, download_url).await?;
    let saved_at = save_to_scratch(&state.scratch_dir, file_name, &content).await?;
    let processing_result = state.processor.process(&saved_at)?;

    tracing::info!(file_name, saved_at = %saved_at.display(), "document intake complete");

    Ok(IntakeResponse {
        message: SUCCESS_MESSAGE.to_string(),
        file_name: file_name.to_string(),
        file_type: payload.file_type.clone(),
        saved_at: saved_at.display().to_string(),
        processing_result,
    })
}
