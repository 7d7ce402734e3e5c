//! Wardrobe operations: image upload and item listing

mod types;

use chrono::Utc;
use reqwest::{multipart, Client};
use std::path::Path;
use url::Url;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Client for wardrobe operations
pub struct ClothingClient {
    /// Base URL of the StyleSync backend
    base_url: String,

    /// Client options
    options: ClientOptions,

    /// HTTP client used for requests
    client: Client,
}

impl ClothingClient {
    /// Create a new ClothingClient
    pub(crate) fn new(base_url: &str, options: ClientOptions, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            options,
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}/clothing{}", self.base_url, self.options.api_prefix, path)
    }

    /// Upload a clothing image for analysis and storage under `user_id`.
    ///
    /// The image is sent as a single multipart `file` part named after the
    /// current time, keeping the source file's extension (`jpg` when the
    /// path carries none). The backend runs vision and color analysis on it
    /// and answers with the stored item; the analysis fields of the response
    /// are optional and may be absent on degraded uploads.
    pub async fn upload_image(
        &self,
        image_path: &Path,
        user_id: &str,
    ) -> Result<UploadResponse, Error> {
        let mut url = Url::parse(&self.endpoint("/upload"))?;
        url.query_pairs_mut().append_pair("user_id", user_id);

        let contents = tokio::fs::read(image_path).await?;

        let extension = image_path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("jpg");
        let file_name = format!("{}.{}", Utc::now().timestamp_millis(), extension);

        let part = multipart::Part::bytes(contents)
            .file_name(file_name)
            .mime_str(&image_mime(extension))?;
        let form = multipart::Form::new().part("file", part);

        let mut request = self.client.post(url.clone()).multipart(form);
        if let Some(timeout) = self.options.request_timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(url = %url, error = %err, "upload could not reach the server");
                return Err(Error::Transport(err));
            }
        };

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            tracing::error!(url = %url, status, "upload rejected by the server");
            return Err(Error::Request { status, body });
        }

        let upload: UploadResponse = serde_json::from_str(&response.text().await?)?;
        if !upload.success {
            tracing::error!(url = %url, message = %upload.message, "upload reported failure");
            return Err(Error::application(&upload.message));
        }

        Ok(upload)
    }

    /// Fetch every clothing item stored for `user_id`, in backend order.
    pub async fn list_items(&self, user_id: &str) -> Result<Vec<ClothingItem>, Error> {
        let url = self.endpoint(&format!("/user/{}/items", user_id));

        let response = Fetch::get(&self.client, &url)
            .timeout(self.options.request_timeout)
            .execute::<ItemListResponse>()
            .await?;

        if !response.success {
            tracing::error!(url = %url, "item listing reported failure");
            return Err(Error::application("item listing reported failure"));
        }

        Ok(response.items)
    }
}

/// MIME type for an image file extension.
fn image_mime(extension: &str) -> String {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        other => format!("image/{}", other),
    }
}
