//! File-backed attachment loading.

use crate::error::Result;
use mailforge_mime::Attachment;
use std::path::Path;

/// Reads a file into an [`Attachment`], using the last path segment as the
/// file name. Set further metadata (content type, disposition, Content-ID)
/// through the attachment's own setters.
///
/// # Errors
///
/// Returns the filesystem error unmodified if the file cannot be read.
pub async fn load_attachment(path: impl AsRef<Path>) -> Result<Attachment> {
    let path = path.as_ref();
    let contents = tokio::fs::read(path).await?;

    let mut attachment = Attachment::new(contents);
    if let Some(name) = path.file_name() {
        attachment = attachment.file_name(name.to_string_lossy());
    }
    Ok(attachment)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_attachment() {
        let dir = std::env::temp_dir().join("mailforge-attach-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("report.txt");
        tokio::fs::write(&path, b"quarterly numbers").await.unwrap();

        let attachment = load_attachment(&path).await.unwrap();
        assert_eq!(attachment.contents, b"quarterly numbers");
        assert_eq!(attachment.file_name.as_deref(), Some("report.txt"));
        assert!(attachment.content_type.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_io_error() {
        let err = load_attachment("/nonexistent/mailforge/file.bin")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
