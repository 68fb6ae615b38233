//! Multipart form bodies for file-attachment sends.

use crate::errors::{WebexError, WebexErrorKind, WebexResult};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// File contents with filename metadata.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name
    pub field_name: String,
    /// File name
    pub file_name: String,
    /// File content
    pub content: Bytes,
    /// MIME type
    pub mime_type: String,
}

impl FileUpload {
    /// Create a new file upload, guessing the MIME type from the name.
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();

        Self {
            field_name: field_name.into(),
            file_name,
            content: content.into(),
            mime_type,
        }
    }

    /// Reads a local file into an upload part.
    pub async fn from_path(field_name: impl Into<String>, path: impl AsRef<Path>) -> WebexResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await.map_err(|e| {
            WebexError::new(
                WebexErrorKind::Attachment,
                format!("Failed to read attachment '{}': {}", path.display(), e),
            )
            .with_cause(e)
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        Ok(Self::new(field_name, file_name, content))
    }
}

/// Multipart body: string fields plus an optional binary part.
///
/// Kept as plain data so each retry can rebuild a fresh `reqwest` form.
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    /// Text fields
    pub fields: Vec<(String, String)>,
    /// File part
    pub file: Option<FileUpload>,
}

impl MultipartBody {
    /// Create an empty multipart body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field when a value is present.
    pub fn field(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.fields.push((name.into(), value.into()));
        }
        self
    }

    /// Attach the file part.
    pub fn file(mut self, upload: FileUpload) -> Self {
        self.file = Some(upload);
        self
    }

    /// Builds the `reqwest` form for one attempt.
    pub fn to_form(&self) -> WebexResult<Form> {
        let mut form = Form::new();

        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }

        if let Some(file) = &self.file {
            let part = Part::stream_with_length(file.content.clone(), file.content.len() as u64)
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| {
                    WebexError::new(
                        WebexErrorKind::Attachment,
                        format!("Invalid attachment MIME type '{}': {}", file.mime_type, e),
                    )
                })?;
            form = form.part(file.field_name.clone(), part);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_upload_mime_guess() {
        let upload = FileUpload::new("files", "report.pdf", vec![1u8, 2, 3]);
        assert_eq!(upload.mime_type, "application/pdf");

        let upload = FileUpload::new("files", "blob", vec![0u8]);
        assert_eq!(upload.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_multipart_skips_absent_fields() {
        let body = MultipartBody::new()
            .field("roomId", Some("room-1"))
            .field("toPersonEmail", Option::<String>::None)
            .field("text", Some("hello"));

        assert_eq!(
            body.fields,
            vec![
                ("roomId".to_string(), "room-1".to_string()),
                ("text".to_string(), "hello".to_string()),
            ]
        );
        assert!(body.to_form().is_ok());
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"attachment body").unwrap();

        let upload = FileUpload::from_path("files", file.path()).await.unwrap();
        assert_eq!(&upload.content[..], b"attachment body");
        assert_eq!(upload.mime_type, "text/plain");
        assert!(upload.file_name.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = FileUpload::from_path("files", "/definitely/not/here.png")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), WebexErrorKind::Attachment);
    }
}
