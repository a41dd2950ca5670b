//! Unsigned uploads to Cloudinary.
//!
//! One multipart POST per file with two fields, `file` and `upload_preset`.
//! Any 2xx response must carry a JSON `secure_url`; everything else is a
//! failure. Nothing is retried.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::CloudinaryConfig;
use crate::error::{UploadError, UploadResult};
use crate::media::SelectedFile;

/// Something that can turn a selected file into a hosted image.
pub trait Uploader {
    fn upload(&self, file: &SelectedFile) -> impl Future<Output = UploadResult<UploadedImage>>;
}

/// The parts of Cloudinary's upload response we use.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    /// HTTPS URL of the stored asset
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Stored size in bytes
    #[serde(default)]
    pub bytes: Option<u64>,
}

impl UploadedImage {
    /// Parse a success body.
    pub fn from_json(body: &[u8]) -> UploadResult<Self> {
        let image: UploadedImage = serde_json::from_slice(body)
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
        if image.secure_url.is_empty() {
            return Err(UploadError::MalformedResponse("empty secure_url".to_string()));
        }
        Ok(image)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pull `error.message` out of a Cloudinary error body, or fall back to the
/// raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}

/// HTTP client for the unsigned upload endpoint.
#[derive(Clone, Debug)]
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig) -> UploadResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CloudinaryConfig {
        &self.config
    }

    fn form_for(&self, file: &SelectedFile) -> UploadResult<Form> {
        let part = Part::stream_with_length(file.data.clone(), file.data.len() as u64)
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        Ok(Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone()))
    }
}

impl Uploader for CloudinaryUploader {
    async fn upload(&self, file: &SelectedFile) -> UploadResult<UploadedImage> {
        let url = self.config.upload_url();
        tracing::info!(
            "Uploading {} ({}, {} bytes) to {}",
            file.name,
            file.content_type,
            file.size(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(self.form_for(file)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.bytes().await?;
        let image = UploadedImage::from_json(&body)?;
        tracing::info!("Upload stored at {}", image.secure_url);
        Ok(image)
    }
}
