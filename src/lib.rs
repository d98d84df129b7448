pub mod config;
pub mod directory;
pub mod downloader;
mod error;
pub mod gallery;

pub use config::{Cli, ConfigError, RunConfig};
pub use directory::ensure_directory;
pub use downloader::{Download, DownloadError, Downloader, Fetcher, Response, UReqFetcher};
pub use error::Error;
pub use gallery::{GalleryClient, GalleryError, ImageRecord};

#[derive(Debug)]
pub struct Summary {
    pub output: String,
    pub downloads: Vec<Download>,
}

// Stops at the first failed record. Files written before it are left in place.
pub fn run<T: Fetcher>(config: &RunConfig, fetcher: T) -> Result<Summary, Error> {
    ensure_directory(&config.output).map_err(|source| Error::Directory {
        path: config.output.clone(),
        source,
    })?;

    let gallery = GalleryClient::with_fetcher(config.client_id.as_str(), &fetcher);
    let records = gallery.fetch_gallery(&config.gallery, config.page_number)?;

    let downloader = Downloader::with_fetcher(&config.output, &fetcher);

    let mut downloads = Vec::with_capacity(records.len());

    for record in &records {
        tracing::info!(title = %record.title, link = %record.link, "downloading");

        let download = downloader
            .download(&record.link)
            .map_err(|source| Error::Download {
                link: record.link.clone(),
                source,
            })?;

        downloads.push(download);
    }

    Ok(Summary {
        output: config.output.clone(),
        downloads,
    })
}
