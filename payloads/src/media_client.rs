//! Client for the third-party media host that stores listing images.

use crate::{ClientError, responses};
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretBox};

pub const DEFAULT_MEDIA_BASE_URL: &str = "https://api.cloudinary.com";

const DEFAULT_UPLOAD_ERROR: &str = "Image upload failed";

/// Pre-shared settings for unsigned uploads.
pub struct MediaConfig {
    pub base_url: String,
    pub cloud_name: String,
    pub upload_preset: SecretBox<String>,
}

impl MediaConfig {
    pub fn new(
        base_url: impl Into<String>,
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            cloud_name: cloud_name.into(),
            upload_preset: SecretBox::new(Box::new(upload_preset.into())),
        }
    }
}

pub struct MediaClient {
    pub config: MediaConfig,
    pub inner_client: reqwest::Client,
}

impl MediaClient {
    pub fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Upload one image, returning the public URL the host assigned to it.
    pub async fn upload_image(
        &self,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<String, ClientError> {
        let file = Part::bytes(data).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", file)
            .text(
                "upload_preset",
                self.config.upload_preset.expose_secret().clone(),
            )
            .text("cloud_name", self.config.cloud_name.clone());

        let response = self
            .inner_client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body: Option<responses::MediaUpload> =
            serde_json::from_str(&text).ok();

        if !status.is_success() {
            return Err(ClientError::APIError(status, upload_error(body)));
        }

        match body.and_then(|body| body.secure_url) {
            Some(url) => Ok(url),
            None => Err(ClientError::APIError(
                status,
                "Image upload did not return a URL".to_string(),
            )),
        }
    }
}

fn upload_error(body: Option<responses::MediaUpload>) -> String {
    body.and_then(|body| body.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_UPLOAD_ERROR.to_string())
}
