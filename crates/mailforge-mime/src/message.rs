//! Message descriptor and content-type derivation.

use crate::attachment::Attachment;

/// An email message descriptor.
///
/// Fill out the fields (directly or through the chained setters), then
/// render the wire format with [`Message::to_rfc5322`]. A message with at
/// least `from`, `to`, and one body is deliverable; anything less still
/// renders, just with the corresponding headers empty.
#[derive(Debug, Clone, Default)]
pub struct Message {
    /// Sender address.
    pub from: String,
    /// Display name rendered alongside `from` as `"Name" <address>`.
    pub from_name: Option<String>,
    /// Sender header override.
    pub sender: Option<String>,
    /// Reply-To addresses.
    pub reply_to: Vec<String>,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// CC addresses.
    pub cc: Vec<String>,
    /// BCC addresses. Delivered to, but never rendered into the headers.
    pub bcc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub text_body: Option<String>,
    /// HTML body.
    pub html_body: Option<String>,
    /// Content-Type override. When unset the type is derived from the
    /// bodies at render time.
    pub content_type: Option<String>,
    /// Character set for text parts.
    pub charset: String,
    /// Attachments, rendered in order.
    pub attachments: Vec<Attachment>,
    /// X-Priority header value.
    pub x_priority: Option<String>,
    /// X-MSMail-Priority header value.
    pub x_msmail_priority: Option<String>,
    /// Importance header value.
    pub importance: Option<String>,
    /// X-NSTraceID correlation header value.
    pub trace_id: Option<String>,
    /// Domain part of the generated Message-ID.
    pub host_name: String,
}

impl Message {
    /// Creates an empty message with the default UTF-8 charset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            charset: "UTF-8".to_string(),
            ..Self::default()
        }
    }

    /// Sets the sender address.
    #[must_use]
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = address.into();
        self
    }

    /// Sets the sender display name.
    #[must_use]
    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    /// Sets the Sender header override.
    #[must_use]
    pub fn sender(mut self, address: impl Into<String>) -> Self {
        self.sender = Some(address.into());
        self
    }

    /// Adds a Reply-To address.
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Adds a recipient.
    #[must_use]
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Sets the subject line.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the plain text body.
    #[must_use]
    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html_body(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Forces the Content-Type, overriding derivation from the bodies.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the character set for text parts.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Adds an attachment.
    #[must_use]
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Flags the message as high priority for the receiver by setting
    /// X-Priority, X-MSMail-Priority, and Importance together.
    #[must_use]
    pub fn high_priority(mut self) -> Self {
        self.x_priority = Some("1 (Highest)".to_string());
        self.x_msmail_priority = Some("High".to_string());
        self.importance = Some("High".to_string());
        self
    }

    /// Sets the X-NSTraceID correlation header.
    #[must_use]
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets the Message-ID domain part.
    #[must_use]
    pub fn host_name(mut self, host_name: impl Into<String>) -> Self {
        self.host_name = host_name.into();
        self
    }

    /// Returns all envelope recipients: `to`, then `cc`, then `bcc`,
    /// order preserved, duplicates allowed.
    #[must_use]
    pub fn envelope_recipients(&self) -> Vec<&str> {
        self.to
            .iter()
            .chain(&self.cc)
            .chain(&self.bcc)
            .map(String::as_str)
            .collect()
    }

    /// Returns the effective Content-Type: the explicit override when set,
    /// otherwise derived from the bodies. Derivation never considers
    /// attachments; a multipart wrapper for attachments must be forced by
    /// the caller.
    #[must_use]
    pub fn effective_content_type(&self) -> &str {
        match &self.content_type {
            Some(ct) => ct,
            None => {
                if self.has_text_body() && self.has_html_body() {
                    "multipart/alternative"
                } else if self.has_html_body() {
                    "text/html"
                } else {
                    "text/plain"
                }
            }
        }
    }

    /// Checks if the effective Content-Type is a multipart type.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.effective_content_type().contains("multipart")
    }

    pub(crate) fn has_text_body(&self) -> bool {
        self.text_body.as_deref().is_some_and(|b| !b.is_empty())
    }

    pub(crate) fn has_html_body(&self) -> bool {
        self.html_body.as_deref().is_some_and(|b| !b.is_empty())
    }
}
