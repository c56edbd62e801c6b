use std::path::PathBuf;

use poem::{error::ResponseError, http::StatusCode, web::Json, IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorBody;
use crate::processing::ProcessingError;

pub const MISSING_DOWNLOAD_URL: &str = "Missing download URL";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("{}", MISSING_DOWNLOAD_URL)]
    MissingDownloadUrl,

    #[error("missing file name, cannot derive a save path")]
    MissingFileName,

    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("processing failed: {0}")]
    Processing(#[from] ProcessingError),
}

impl ResponseError for IntakeError {
    fn status(&self) -> StatusCode {
        match self {
            IntakeError::MissingDownloadUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Only the validation error is reported to the caller. Everything else
    // gets the bare reason phrase; the detail goes to the log.
    fn as_response(&self) -> Response
    where
        Self: std::error::Error + Send + Sync + 'static,
    {
        match self {
            IntakeError::MissingDownloadUrl => Json(ErrorBody {
                error: MISSING_DOWNLOAD_URL.to_string(),
            })
            .with_status(self.status())
            .into_response(),
            _ => {
                tracing::error!(error = %self, "document intake failed");
                let status = self.status();
                Response::builder()
                    .status(status)
                    .body(status.canonical_reason().unwrap_or_default())
            }
        }
    }
}
