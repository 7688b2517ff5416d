use serde::{Deserialize, Serialize};

/// Error body returned by the backend on a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body returned by the media host for an upload.
///
/// Successful uploads carry `secure_url`; failures carry `error.message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUpload {
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub error: Option<ErrorMessage>,
}
