use reqwest::{
    StatusCode,
    multipart::{Form, Part},
};
use serde::Deserialize;

use crate::error::ApiError;

/// An image received from a client, ready to be forwarded to the host
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Client for the ImgBB upload API
#[derive(Clone, Debug)]
pub struct ImageHost {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: Option<UploadedImage>,
    error: Option<UploadError>,
}

#[derive(Debug, Deserialize)]
struct UploadedImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct UploadError {
    message: String,
}

impl UploadResponse {
    fn into_url(self, status: StatusCode) -> Result<String, ApiError> {
        if status.is_success()
            && let Some(image) = self.data
        {
            return Ok(image.url);
        }

        let reason = self
            .error
            .map(|error| error.message)
            .unwrap_or_else(|| format!("unexpected response with status {status}"));

        Err(ApiError::ImageUpload(reason))
    }
}

impl ImageHost {
    pub fn new(upload_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url,
            api_key,
        }
    }

    /// Upload an image and return its public URL
    pub async fn upload(&self, image: ImageUpload) -> Result<String, ApiError> {
        let mut part = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::ImageUpload(format!("invalid content type: {e}")))?;
        }

        let response = self
            .client
            .post(&self.upload_url)
            .query(&[("key", self.api_key.as_str())])
            .multipart(Form::new().part("image", part))
            .send()
            .await
            .map_err(|e| ApiError::ImageUpload(e.to_string()))?;

        let status = response.status();
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ImageUpload(format!("unreadable response: {e}")))?;

        let url = body.into_url(status)?;
        tracing::debug!(url = %url, "Image uploaded");
        Ok(url)
    }
}
