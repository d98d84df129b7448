mod fetcher;

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

pub use fetcher::UReqFetcher;

#[cfg(test)]
pub(crate) use fetcher::MockFetcher;

pub type Body = Box<dyn Read + Send>;

// An error status still carries whatever body the server sent.
pub enum Response {
    Ok(Body),
    Status(u16, Body),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Body) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16, body: Body) -> Self {
        Self::Status(code, body)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }

    pub fn into_body(self) -> Result<Body, String> {
        match self {
            Self::Ok(body) | Self::Status(_, body) => Ok(body),
            Self::NetworkError(message) => Err(message),
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(_) => f.write_str("Ok(<body>)"),
            Self::Status(code, _) => f.debug_tuple("Status").field(code).finish(),
            Self::NetworkError(message) => f.debug_tuple("NetworkError").field(message).finish(),
        }
    }
}

pub trait Fetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        (**self).fetch(url, headers)
    }
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("cannot derive a file name from `{url}`")]
    InvalidUrl { url: String },

    #[error("request to `{url}` failed: {message}")]
    Network { url: String, message: String },

    #[error("cannot create `{}`: {source}", path.display())]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", path.display())]
    Transfer { path: PathBuf, source: io::Error },
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub bytes: u64,
}

impl Download {
    pub fn new(source: String, file: PathBuf, bytes: u64) -> Self {
        Self {
            source,
            file,
            bytes,
        }
    }
}

pub struct Downloader<T: Fetcher> {
    fetcher: T,
    path: PathBuf,
}

impl<T> Downloader<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> Self {
        Downloader {
            path: path.as_ref().to_path_buf(),
            fetcher,
        }
    }

    pub fn download(&self, url: &str) -> Result<Download, DownloadError> {
        let file_name = file_name(url)?;

        let response = self.fetcher.fetch(url, &[]);

        if let Response::Status(code, _) = &response {
            tracing::warn!(url, code, "saving error response body");
        }

        let mut body = response
            .into_body()
            .map_err(|message| DownloadError::Network {
                url: url.to_string(),
                message,
            })?;

        // Existing files are truncated.
        let file_path = self.path.join(file_name);

        let mut file = File::create(&file_path).map_err(|source| DownloadError::CreateFile {
            path: file_path.clone(),
            source,
        })?;

        let bytes = io::copy(&mut body, &mut file).map_err(|source| DownloadError::Transfer {
            path: file_path.clone(),
            source,
        })?;

        tracing::debug!(url, file = %file_path.display(), bytes, "saved file");

        Ok(Download::new(url.to_string(), file_path, bytes))
    }
}

// 4th `/`-delimited segment, i.e. the first path segment of `scheme://host/segment/...`.
fn file_name(url: &str) -> Result<&str, DownloadError> {
    let invalid = || DownloadError::InvalidUrl {
        url: url.to_string(),
    };

    Url::parse(url).map_err(|_| invalid())?;

    match url.split('/').nth(3) {
        Some(segment) if !segment.is_empty() => Ok(segment),
        _ => Err(invalid()),
    }
}
