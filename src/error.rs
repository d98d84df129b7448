use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::downloader::DownloadError;
use crate::gallery::GalleryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("directory error for `{path}`: {source}")]
    Directory { path: String, source: io::Error },

    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error("error saving file `{link}`: {source}")]
    Download { link: String, source: DownloadError },
}
