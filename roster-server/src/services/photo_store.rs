//! Photo storage
//!
//! Validates and stores member photos on the local filesystem. Bytes are
//! written exactly as uploaded; the store never re-encodes an image, so the
//! declared content type stays recoverable from the file extension.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// A photo written to the store
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    /// Store-relative path, e.g. `members/1724371200000_alice.png`
    pub path: String,
    /// Public URL the photo is served under
    pub url: String,
    /// Size in bytes, as uploaded
    pub size: usize,
    /// Declared content type, or one guessed from the extension
    pub content_type: String,
}

/// Photo store rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct PhotoStore {
    photos_dir: PathBuf,
    public_base: String,
}

impl PhotoStore {
    pub fn new(photos_dir: PathBuf, public_base_url: String) -> Self {
        Self {
            photos_dir,
            public_base: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Validate and store an uploaded photo
    ///
    /// The storage path is `members/{timestamp_millis}_{sanitized_name}`;
    /// the millisecond timestamp keeps concurrent uploads of the same
    /// filename from landing on the same path.
    pub fn store(
        &self,
        original_name: &str,
        declared_content_type: Option<&str>,
        bytes: &[u8],
    ) -> AppResult<StoredPhoto> {
        if bytes.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyFile));
        }
        if bytes.len() > MAX_FILE_SIZE {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File is {} bytes; maximum is {} bytes ({}MB)",
                    bytes.len(),
                    MAX_FILE_SIZE,
                    MAX_FILE_SIZE / 1024 / 1024
                ),
            ));
        }

        let name = original_name.trim();
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::NoFilename));
        }

        let ext = PathBuf::from(name)
            .extension()
            .and_then(|e| e.to_str().map(|s| s.to_lowercase()))
            .unwrap_or_default();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::UnsupportedFileFormat,
                format!(
                    "Unsupported file format '{}'. Supported: {}",
                    ext,
                    SUPPORTED_FORMATS.join(", ")
                ),
            ));
        }

        if let Some(declared) = declared_content_type
            && !declared.starts_with("image/")
        {
            return Err(AppError::with_message(
                ErrorCode::UnsupportedFileFormat,
                format!("Declared content type '{}' is not an image", declared),
            ));
        }

        // The bytes must actually decode, whatever the extension claims
        if let Err(e) = image::load_from_memory(bytes) {
            return Err(AppError::with_message(
                ErrorCode::InvalidImageFile,
                format!("Invalid image file ({}): {}", ext, e),
            ));
        }

        let content_type = match declared_content_type {
            Some(declared) => declared.to_string(),
            None => mime_guess::from_path(name).first_or_octet_stream().to_string(),
        };

        let rel_path = format!(
            "members/{}_{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(name)
        );

        self.store_at(&rel_path, content_type, bytes)
    }

    /// Write bytes to a store-relative path, refusing to overwrite
    fn store_at(
        &self,
        rel_path: &str,
        content_type: String,
        bytes: &[u8],
    ) -> AppResult<StoredPhoto> {
        let abs_path = self.photos_dir.join(rel_path);

        if let Some(parent) = abs_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::with_message(
                    ErrorCode::UploadFailed,
                    format!("Failed to create photo directory: {}", e),
                )
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&abs_path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => AppError::new(ErrorCode::PhotoAlreadyExists),
                _ => AppError::with_message(
                    ErrorCode::UploadFailed,
                    format!("Failed to create photo file: {}", e),
                ),
            })?;
        file.write_all(bytes).map_err(|e| {
            AppError::with_message(
                ErrorCode::UploadFailed,
                format!("Failed to write photo file: {}", e),
            )
        })?;

        tracing::info!(
            path = %rel_path,
            size = bytes.len(),
            "Photo stored"
        );

        Ok(StoredPhoto {
            url: format!("{}/api/photos/{}", self.public_base, rel_path),
            path: rel_path.to_string(),
            size: bytes.len(),
            content_type,
        })
    }

    /// Resolve a store-relative path for serving
    ///
    /// Rejects anything with empty, `..`, or backslash segments so a request
    /// can never read outside the photos directory.
    pub fn resolve(&self, rel_path: &str) -> AppResult<PathBuf> {
        let valid = !rel_path.is_empty()
            && !rel_path.contains('\\')
            && rel_path.split('/').all(|seg| !seg.is_empty() && seg != "..");
        if !valid {
            return Err(AppError::invalid_request(format!(
                "Invalid photo path: {}",
                rel_path
            )));
        }
        Ok(self.photos_dir.join(rel_path))
    }
}

/// Replace anything outside `[A-Za-z0-9._-]` with an underscore
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PhotoStore {
        PhotoStore::new(dir.path().to_path_buf(), "http://localhost:3000".to_string())
    }

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_store_and_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        let bytes = tiny_png();

        let stored = store
            .store("Alice Photo.png", Some("image/png"), &bytes)
            .unwrap();

        assert!(stored.path.starts_with("members/"));
        assert!(stored.path.ends_with("_Alice_Photo.png"));
        assert_eq!(
            stored.url,
            format!("http://localhost:3000/api/photos/{}", stored.path)
        );
        assert_eq!(stored.size, bytes.len());
        assert_eq!(stored.content_type, "image/png");

        // Bytes land on disk exactly as uploaded
        let on_disk = std::fs::read(tmp.path().join(&stored.path)).unwrap();
        assert_eq!(on_disk, bytes);
    }

    #[test]
    fn test_rejects_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = store_in(&tmp).store("a.png", None, &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyFile);
    }

    #[test]
    fn test_rejects_oversize_file() {
        let tmp = tempfile::tempdir().unwrap();
        let bytes = vec![0u8; MAX_FILE_SIZE + 1];
        let err = store_in(&tmp).store("a.png", None, &bytes).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileTooLarge);
    }

    #[test]
    fn test_rejects_missing_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let err = store_in(&tmp).store("  ", None, &tiny_png()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoFilename);
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let err = store_in(&tmp)
            .store("notes.txt", None, &tiny_png())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedFileFormat);
    }

    #[test]
    fn test_rejects_non_image_content_type() {
        let tmp = tempfile::tempdir().unwrap();
        let err = store_in(&tmp)
            .store("a.png", Some("text/plain"), &tiny_png())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedFileFormat);
    }

    #[test]
    fn test_rejects_bytes_that_do_not_decode() {
        let tmp = tempfile::tempdir().unwrap();
        let err = store_in(&tmp)
            .store("a.png", Some("image/png"), b"not an image")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidImageFile);
    }

    #[test]
    fn test_never_overwrites_an_existing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        store
            .store_at("members/1_a.png", "image/png".to_string(), &tiny_png())
            .unwrap();
        let err = store
            .store_at("members/1_a.png", "image/png".to_string(), &tiny_png())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PhotoAlreadyExists);

        // First write survives
        let on_disk = std::fs::read(tmp.path().join("members/1_a.png")).unwrap();
        assert_eq!(on_disk, tiny_png());
    }

    #[test]
    fn test_content_type_guessed_from_extension() {
        let tmp = tempfile::tempdir().unwrap();
        // webp magic is not required; any decodable bytes work for the gate
        let stored = store_in(&tmp).store("a.png", None, &tiny_png()).unwrap();
        assert_eq!(stored.content_type, "image/png");
    }

    #[test]
    fn test_resolve_accepts_store_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        let path = store.resolve("members/1_a.png").unwrap();
        assert_eq!(path, tmp.path().join("members/1_a.png"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        for bad in ["", "../secrets.txt", "members/../../etc/passwd", "members//x.png", "a\\b.png", "/members/a.png"] {
            let err = store.resolve(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidRequest, "path: {:?}", bad);
        }
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("club photo (1).png"), "club_photo__1_.png");
        assert_eq!(sanitize_filename("weird/../name.png"), "weird_.._name.png");
        assert_eq!(sanitize_filename("simple.jpg"), "simple.jpg");
    }
}
