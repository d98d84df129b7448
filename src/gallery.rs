use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::downloader::{Fetcher, Response};

pub const API_BASE: &str = "https://api.imgur.com";

pub const DEFAULT_CLIENT_ID: &str = "b68d6fbd258b5ac";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct GalleryResponse {
    data: Vec<ImageRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("gallery request to `{url}` failed: {message}")]
    Transport { url: String, message: String },
}

pub struct GalleryClient<T: Fetcher> {
    fetcher: T,
    client_id: String,
}

impl<T> GalleryClient<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(client_id: impl Into<String>, fetcher: T) -> Self {
        GalleryClient {
            fetcher,
            client_id: client_id.into(),
        }
    }

    pub fn gallery_url(gallery: &str, page_number: i64) -> String {
        format!("{API_BASE}/3/gallery/{gallery}/time/{page_number}")
    }

    // Only transport failures are errors; an undecodable body is an empty page.
    pub fn fetch_gallery(
        &self,
        gallery: &str,
        page_number: i64,
    ) -> Result<Vec<ImageRecord>, GalleryError> {
        let url = Self::gallery_url(gallery, page_number);
        let authorization = format!("Client-ID {}", self.client_id);

        let headers = [
            ("authorization", authorization.as_str()),
            ("content-type", "application/json"),
        ];

        let response = self.fetcher.fetch(&url, &headers);

        if let Response::Status(code, _) = &response {
            tracing::warn!(%url, code, "gallery request was rejected");
        }

        let body = match response.into_body() {
            Ok(body) => body,
            Err(message) => return Err(GalleryError::Transport { url, message }),
        };

        match serde_json::from_reader::<_, GalleryResponse>(body) {
            Ok(response) => {
                tracing::info!(%url, records = response.data.len(), "fetched gallery");
                Ok(response.data)
            }
            Err(error) => {
                tracing::warn!(%url, %error, "cannot decode gallery response");
                Ok(Vec::new())
            }
        }
    }
}
