use crate::domain::Book;
use crate::extensions::path_ext::FileName;
use futures::future::join_all;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads the books of every `*.{extension}` snapshot in `directory`, in file name order.
///
/// A snapshot that cannot be read or parsed is logged and skipped, only an unreadable directory fails.
#[instrument]
pub async fn load_books_from(directory: &str, extension: &str) -> Result<Vec<Book>, LoaderError> {
    info!("📁 Loading listing snapshots...");
    let snapshots = list_snapshots(Path::new(directory), extension)
        .await
        .map_err(|e| LoaderError::ReadDirectory {
            source: e,
            path: PathBuf::from(directory),
        })?;

    let mut books = Vec::new();
    let mut skipped = 0;
    for result in join_all(snapshots.into_iter().map(load_snapshot)).await {
        match result {
            Ok(snapshot) => books.extend(snapshot),
            Err(error) => {
                warn!("⚠️ Skipping listing snapshot: {}", error);
                skipped += 1;
            }
        }
    }

    info!("📁 Loading listing snapshots... OK, {} book(s) loaded, {} snapshot(s) skipped", books.len(), skipped);
    Ok(books)
}

#[instrument]
async fn list_snapshots(directory: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut snapshots = ReadDirStream::new(fs::read_dir(directory).await?)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                warn!("⚠️ Unable to read directory entry: {}", err);
                None
            }
        })
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect::<Vec<_>>()
        .await;

    // Read order of a directory is not defined
    snapshots.sort();
    Ok(snapshots)
}

/// A snapshot holds a JSON array of books.
async fn load_snapshot(path: PathBuf) -> Result<Vec<Book>, LoaderError> {
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(source) => return Err(LoaderError::ReadSnapshot { source, path }),
    };

    task::spawn_blocking(move || serde_json::from_str::<Vec<Book>>(&content).map_err(|source| LoaderError::Json { source, path })).await?
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("unable to read '{}': {source}", .path.display())]
    ReadDirectory { source: io::Error, path: PathBuf },
    #[error("unable to read '{}': {source}", .path.string_file_name())]
    ReadSnapshot { source: io::Error, path: PathBuf },
    #[error("'{}' is not a list of books: {source}", .path.string_file_name())]
    Json { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
