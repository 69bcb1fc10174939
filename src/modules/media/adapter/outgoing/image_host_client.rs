use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use std::env;

use crate::media::application::ports::outgoing::{ImageStore, ImageStoreError, StoredImage};

#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ImageHostConfig {
    /// Load image host configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("IMAGE_HOST_URL").expect("IMAGE_HOST_URL must be set"),
            api_key: env::var("IMAGE_HOST_API_KEY").expect("IMAGE_HOST_API_KEY must be set"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// REST client for the external image host. Uploads are multipart posts
/// returning the public URL and the host-side id used for deletion.
#[derive(Clone)]
pub struct ImageHostClient {
    http: reqwest::Client,
    config: ImageHostConfig,
}

impl ImageHostClient {
    pub fn new(config: ImageHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ImageStore for ImageHostClient {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, ImageStoreError> {
        let part = multipart::Part::bytes(bytes).file_name("photo");
        let form = multipart::Form::new()
            .part("file", part)
            .text("folder", folder.to_string());

        let response = self
            .http
            .post(format!("{}/image/upload", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageStoreError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageStoreError::UploadFailed(format!(
                "image host returned {}",
                response.status()
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageStoreError::UploadFailed(e.to_string()))?;

        Ok(StoredImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), ImageStoreError> {
        let response = self
            .http
            .post(format!("{}/image/destroy", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({ "public_id": public_id }))
            .send()
            .await
            .map_err(|e| ImageStoreError::DeleteFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageStoreError::DeleteFailed(format!(
                "image host returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
