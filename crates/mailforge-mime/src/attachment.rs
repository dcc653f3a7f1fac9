//! Attachment entity and its MIME part rendering.

use crate::encoding::encode_base64;
use std::fmt::Write as _;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const DEFAULT_DISPOSITION: &str = "attachment";

/// An email attachment.
///
/// At the very least the contents should be populated; a file name is
/// needed for the `filename=` parameter and Content-Description header to
/// render. Unset content type and disposition fall back to
/// `application/octet-stream` and `attachment`.
#[derive(Debug, Clone, Default)]
pub struct Attachment {
    /// MIME type of the payload.
    pub content_type: Option<String>,
    /// Content-Disposition value.
    pub content_disposition: Option<String>,
    /// Content-ID, for parts referenced inline from an HTML body.
    pub content_id: Option<String>,
    /// File name reported to the receiver.
    pub file_name: Option<String>,
    /// Raw payload.
    pub contents: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from a raw payload.
    #[must_use]
    pub fn new(contents: Vec<u8>) -> Self {
        Self {
            contents,
            ..Self::default()
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the Content-Disposition value.
    #[must_use]
    pub fn content_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(disposition.into());
        self
    }

    /// Sets the Content-ID.
    #[must_use]
    pub fn content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    /// Sets the file name.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Renders the attachment as a MIME part: headers, a blank line, and
    /// the base64-encoded payload.
    pub(crate) fn render_into(&self, out: &mut String) {
        let content_type = self
            .content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);
        let disposition = self
            .content_disposition
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DISPOSITION);
        let file_name = self.file_name.as_deref().filter(|n| !n.is_empty());

        let _ = write!(out, "Content-Type: {content_type}");
        if let Some(name) = file_name {
            let _ = write!(out, "; name=\"{name}\"");
        }
        out.push_str("\r\n");

        if let Some(id) = &self.content_id {
            let _ = write!(out, "Content-ID: <{id}>\r\n");
        }

        let _ = write!(
            out,
            "Content-Disposition: {disposition}; size={}",
            self.contents.len()
        );
        if let Some(name) = file_name {
            let _ = write!(out, "; filename=\"{name}\"");
            let _ = write!(out, "\r\nContent-Description: {name}");
        }

        out.push_str("\r\nContent-Transfer-Encoding: base64\r\n\r\n");
        out.push_str(&encode_base64(&self.contents));
        out.push_str("\r\n\r\n");
    }
}
