use crate::error::{Result, ScrapeError};
use crate::fetchers::Fetcher;
use crate::results::ImageDownloadBatch;
use crate::utils::{date_tag, image_file_name, today};
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A download batch that stopped early
#[derive(Debug)]
pub struct DownloadFailure {
    pub error: ScrapeError,
    /// Files written before the failure
    pub written: usize,
}

/// Saves images into `<root>/<images_dir>/<day-month-year_>/img<N>.<ext>`.
///
/// The dated directory is created fresh on every call, so a second call on
/// the same day fails with [`ScrapeError::DirectoryExists`]. Images are
/// fetched and written one after another; the first failure stops the batch
/// and files already written are left in place.
#[derive(Debug)]
pub struct ImageDownloader<'a, F: Fetcher> {
    fetcher: &'a F,
    root: PathBuf,
    images_dir: String,
    date: Option<NaiveDate>,
}

impl<'a, F: Fetcher> ImageDownloader<'a, F> {
    pub fn new(fetcher: &'a F, root: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            root: root.into(),
            images_dir: "images".to_string(),
            date: None,
        }
    }

    /// Name of the directory created under the root
    pub fn with_images_dir(mut self, images_dir: impl Into<String>) -> Self {
        self.images_dir = images_dir.into();
        self
    }

    /// Pin the date used for the directory name instead of today's
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Directory this downloader writes into
    pub fn target_directory(&self) -> PathBuf {
        let date = self.date.unwrap_or_else(today);
        self.root.join(&self.images_dir).join(date_tag(date))
    }

    /// Downloads every link in order
    pub async fn download(
        &self,
        links: &[String],
    ) -> std::result::Result<ImageDownloadBatch, DownloadFailure> {
        let target = self.target_directory();
        self.prepare_directories(&target)
            .await
            .map_err(|error| DownloadFailure { error, written: 0 })?;

        ::log::info!(
            "Downloading {} images into {}",
            links.len(),
            target.display()
        );

        let mut files = Vec::with_capacity(links.len());
        for (i, link) in links.iter().enumerate() {
            let path = target.join(image_file_name(i + 1, link));
            self.save(link, &path)
                .await
                .map_err(|error| DownloadFailure {
                    error,
                    written: files.len(),
                })?;
            files.push(path);
        }

        Ok(ImageDownloadBatch {
            target_directory: target,
            downloaded_count: files.len(),
            files,
        })
    }

    /// Ensures the images directory exists, then creates the dated directory
    async fn prepare_directories(&self, target: &Path) -> Result<()> {
        let images = self.root.join(&self.images_dir);
        tokio::fs::create_dir_all(&images)
            .await
            .map_err(|source| ScrapeError::Write {
                path: images.clone(),
                source,
            })?;

        match tokio::fs::create_dir(target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(ScrapeError::DirectoryExists(target.to_path_buf()))
            }
            Err(source) => Err(ScrapeError::Write {
                path: target.to_path_buf(),
                source,
            }),
        }
    }

    /// Fetches one image and writes it, truncating any existing file
    async fn save(&self, link: &str, path: &Path) -> Result<()> {
        let bytes = self.fetcher.get_bytes(link).await?;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|source| ScrapeError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        ::log::debug!("Saved {} ({} bytes) to {}", link, bytes.len(), path.display());
        Ok(())
    }
}
