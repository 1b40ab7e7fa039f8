//! Filesystem image store.
//!
//! DESIGN
//! ======
//! The images directory is the only durable state. Uploaded files are named
//! `uploads-<epoch-millis>.<ext>`; nothing else is recorded. Listing skips
//! directories and OS junk files (Finder/Explorer metadata, editor swap
//! files) so the gallery only sees real uploads.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Accepted upload MIME types and the extension used when the client file
/// name has none.
const ACCEPTED_TYPES: &[(&str, &str)] = &[("image/jpeg", "jpg"), ("image/png", "png")];

/// How many later millisecond slots to try when a generated name is taken.
const NAME_RETRIES: u128 = 16;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("image store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("no free file name for upload at {0}")]
    NameExhausted(u128),
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed: format not supported ({0})")]
    UnsupportedFormat(String),
    #[error("Failed: no file in field `upload`")]
    MissingFile,
    #[error("Failed: malformed multipart body: {0}")]
    Multipart(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// =============================================================================
// NAMING
// =============================================================================

/// Whether `name` is OS or editor clutter that must not be listed.
#[must_use]
pub fn is_junk(name: &str) -> bool {
    const EXACT: &[&str] = &[
        ".DS_Store",
        ".AppleDouble",
        ".LSOverride",
        ".Spotlight-V100",
        ".Trashes",
        "__MACOSX",
        "Thumbs.db",
        "ehthumbs.db",
        "Desktop.ini",
        "desktop.ini",
        "npm-debug.log",
        "Icon\r",
    ];
    EXACT.contains(&name)
        || name.starts_with("._")
        || (name.starts_with('.') && name.ends_with(".swp"))
        || name.ends_with('~')
        || name.ends_with("@eaDir")
}

/// Extension for an accepted MIME type, or `None` if the type is rejected.
#[must_use]
pub fn extension_for_type(content_type: &str) -> Option<&'static str> {
    ACCEPTED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// Extension to store an upload under: the client file name's last `.`
/// segment when it is plain alphanumeric, else the MIME type's default.
#[must_use]
pub fn upload_extension(original_name: Option<&str>, default_ext: &str) -> String {
    original_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(default_ext)
        .to_owned()
}

#[must_use]
pub fn upload_file_name(epoch_ms: u128, ext: &str) -> String {
    format!("uploads-{epoch_ms}.{ext}")
}

/// A bare file name that cannot escape the images directory.
#[must_use]
pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Content type served for a stored file, by extension.
#[must_use]
pub fn content_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

#[must_use]
pub fn now_epoch_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the images directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Names of stored files, junk filtered, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_junk(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Validate and persist an upload, returning the stored file name.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for MIME types other than JPEG/PNG (nothing
    /// is written) or a storage error if the file cannot be created.
    pub async fn save(
        &self,
        original_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
        epoch_ms: u128,
    ) -> Result<String, UploadError> {
        let content_type = content_type.unwrap_or_default();
        let default_ext = extension_for_type(content_type)
            .ok_or_else(|| UploadError::UnsupportedFormat(content_type.to_owned()))?;
        let ext = upload_extension(original_name, default_ext);

        for slot in epoch_ms..epoch_ms + NAME_RETRIES {
            let name = upload_file_name(slot, &ext);
            let path = self.dir.join(&name);
            let file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;
            let file = match file {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(StorageError::Io(e).into()),
            };
            write_new(file, &path, bytes).await?;
            return Ok(name);
        }
        Err(StorageError::NameExhausted(epoch_ms).into())
    }

    /// Read a stored file. `Ok(None)` for unsafe or missing names.
    ///
    /// # Errors
    ///
    /// Returns an error for IO failures other than not-found.
    pub async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if !is_safe_name(name) || is_junk(name) {
            return Ok(None);
        }
        match tokio::fs::read(self.dir.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Fill a file just created at `path`. On failure the file is removed so a
/// partial upload never shows up in [`ImageStore::list`].
async fn write_new<W: AsyncWrite + Unpin>(mut file: W, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let written = async {
        file.write_all(bytes).await?;
        file.flush().await
    }
    .await;
    let Err(e) = written else {
        return Ok(());
    };
    drop(file);
    if let Err(remove_err) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %remove_err, "failed to remove partial upload");
    }
    Err(e.into())
}
