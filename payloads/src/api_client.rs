use crate::{requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Shown when the backend rejects a vehicle without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to submit the form";

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Create a vehicle listing from already-uploaded image URLs.
    pub async fn create_vehicle(
        &self,
        details: &requests::CreateVehicle,
    ) -> Result<(), ClientError> {
        let response = self.post("vehicles", details).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the message to surface.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Check that a response is OK, ignoring its body, or return the server's
/// `message` as a ClientError.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        return Err(ClientError::APIError(status, rejection_message(&text)));
    }
    Ok(())
}

/// Pull the `message` out of an error body. Bodies that are not JSON, or
/// whose message is missing or empty, fall back to a generic message.
pub fn rejection_message(body: &str) -> String {
    serde_json::from_str::<responses::ErrorMessage>(body)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string())
}
