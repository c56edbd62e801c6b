use serde::{Serialize, Deserialize};

// The JSON body posted to /process-document.
//
// Every field is optional on the wire. A missing key deserializes to None
// instead of failing the whole body, so the handler decides what is required.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub download_url: Option<String>,
}

impl IntakeRequest {
    // An empty string counts as missing.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub message: String,
    pub file_name: String,
    pub file_type: Option<String>,
    pub saved_at: String,
    pub processing_result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
