use std::path::{is_separator, MAIN_SEPARATOR};

use clap::Parser;
use thiserror::Error;

use crate::gallery::DEFAULT_CLIENT_ID;

/// Downloads one page of an Imgur gallery into a local directory
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Sets the imgur gallery to pull images from e.g. r/funny
    #[arg(long)]
    pub gallery: Option<String>,

    /// Sets the directory to save the images to e.g. ./pictures/
    #[arg(long)]
    pub output: Option<String>,

    /// Sets the gallery page number to pull images from
    #[arg(
        long = "pageNumber",
        visible_alias = "page-number",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub page_number: i64,

    /// Client-ID used to authorize the gallery request
    #[arg(long, env = "IMGUR_CLIENT_ID", default_value = DEFAULT_CLIENT_ID)]
    pub client_id: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("You must provide a gallery to pull images from.")]
    MissingGallery,

    #[error("You must provide an output path to save images to.")]
    MissingOutput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub gallery: String,
    // Always ends with a path separator.
    pub output: String,
    pub page_number: i64,
    pub client_id: String,
}

impl RunConfig {
    pub fn new(
        gallery: &str,
        output: &str,
        page_number: i64,
        client_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if gallery.is_empty() {
            return Err(ConfigError::MissingGallery);
        }

        if output.is_empty() {
            return Err(ConfigError::MissingOutput);
        }

        Ok(RunConfig {
            gallery: gallery.to_string(),
            output: with_trailing_separator(output),
            page_number,
            client_id: client_id.into(),
        })
    }

    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        RunConfig::new(
            cli.gallery.as_deref().unwrap_or_default(),
            cli.output.as_deref().unwrap_or_default(),
            cli.page_number,
            cli.client_id,
        )
    }
}

fn with_trailing_separator(path: &str) -> String {
    if path.ends_with(is_separator) {
        path.to_string()
    } else {
        format!("{path}{MAIN_SEPARATOR}")
    }
}
