//! Wire-format rendering: turns a [`Message`] into RFC 5322 bytes.

use crate::message::Message;
use crate::{encoding::encode_base64, token};
use chrono::Local;
use std::fmt::Write as _;

/// Date header format, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`.
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

impl Message {
    /// Renders the message as it will be sent over the wire.
    ///
    /// This is infallible and leaves the descriptor untouched: the
    /// effective content type is derived on the fly, and the boundary,
    /// Date, and Message-ID values are freshly generated on every call.
    #[must_use]
    pub fn to_rfc5322(&self) -> String {
        let content_type = self.effective_content_type();
        let boundary = content_type
            .contains("multipart")
            .then(token::boundary)
            .unwrap_or_default();

        let mut m = String::new();

        let _ = write!(m, "Content-Type: {content_type}");
        if !boundary.is_empty() {
            let _ = write!(m, "; boundary=\"{boundary}\"");
        }
        m.push_str("\r\n");
        m.push_str("MIME-Version: 1.0\r\n");

        let _ = write!(m, "From: {}\r\n", self.from_line());
        if let Some(sender) = &self.sender {
            let _ = write!(m, "Sender: {sender}\r\n");
        }
        if !self.reply_to.is_empty() {
            let _ = write!(m, "Reply-To: {}\r\n", self.reply_to.join(", "));
        }
        // To is always present, even when empty. BCC is never rendered.
        let _ = write!(m, "To: {}\r\n", self.to.join(", "));
        if !self.cc.is_empty() {
            let _ = write!(m, "CC: {}\r\n", self.cc.join(", "));
        }
        let _ = write!(m, "Subject: {}\r\n", self.subject);
        let _ = write!(m, "Date: {}\r\n", Local::now().format(DATE_FORMAT));

        if let Some(priority) = &self.x_priority {
            let _ = write!(m, "X-Priority: {priority}\r\n");
        }
        if let Some(priority) = &self.x_msmail_priority {
            let _ = write!(m, "X-MSMail-Priority: {priority}\r\n");
        }
        if let Some(importance) = &self.importance {
            let _ = write!(m, "Importance: {importance}\r\n");
        }
        if let Some(trace_id) = &self.trace_id {
            let _ = write!(m, "X-NSTraceID: {trace_id}\r\n");
        }

        let host_name = if self.host_name.is_empty() {
            "localhost"
        } else {
            &self.host_name
        };
        let _ = write!(m, "Message-ID: <{}@{host_name}>\r\n", token::message_id());

        if !boundary.is_empty() {
            let _ = write!(m, "\r\n--{boundary}\r\n");
        }

        if self.has_text_body()
            && self.has_html_body()
            && content_type != "multipart/alternative"
        {
            // The caller forced an outer multipart type (e.g. mixed, for
            // attachments), so the plain/HTML pair nests inside its own
            // multipart/alternative cluster with a second boundary.
            let inner = token::boundary();
            let _ = write!(
                m,
                "Content-Type: multipart/alternative; boundary=\"{inner}\"\r\n"
            );
            let _ = write!(m, "--{inner}\r\n");
            self.render_text_part(&mut m, &inner);
            self.render_html_part(&mut m, &inner);
            terminate_boundary(&mut m);
            m.push_str("\r\n");
            let _ = write!(m, "--{boundary}\r\n");
        } else {
            self.render_text_part(&mut m, &boundary);
            self.render_html_part(&mut m, &boundary);
        }

        for attachment in &self.attachments {
            attachment.render_into(&mut m);
            let _ = write!(m, "--{boundary}\r\n");
        }

        if !boundary.is_empty() {
            terminate_boundary(&mut m);
        }

        m
    }

    fn from_line(&self) -> String {
        match self.from_name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => format!("\"{name}\" <{}>", self.from),
            None => self.from.clone(),
        }
    }

    fn render_text_part(&self, m: &mut String, boundary: &str) {
        let Some(body) = self.text_body.as_deref().filter(|b| !b.is_empty()) else {
            return;
        };

        let _ = write!(m, "Content-Type: text/plain; charset=\"{}\"\r\n", self.charset);
        m.push_str("MIME-Version: 1.0\r\n");
        m.push_str("\r\n");
        m.push_str(body);
        m.push_str("\r\n\r\n");
        if !boundary.is_empty() {
            let _ = write!(m, "--{boundary}\r\n");
        }
    }

    fn render_html_part(&self, m: &mut String, boundary: &str) {
        let Some(body) = self.html_body.as_deref().filter(|b| !b.is_empty()) else {
            return;
        };

        let _ = write!(m, "Content-Type: text/html; charset=\"{}\"\r\n", self.charset);
        m.push_str("MIME-Version: 1.0\r\n");
        m.push_str("Content-Transfer-Encoding: base64\r\n");
        m.push_str("\r\n");
        m.push_str(&encode_base64(body.as_bytes()));
        m.push_str("\r\n\r\n");
        if !boundary.is_empty() {
            let _ = write!(m, "--{boundary}\r\n");
        }
    }
}

/// Rewrites the trailing `--boundary` delimiter into the terminal
/// `--boundary--` form: strip trailing CR/LF, append the two dashes.
fn terminate_boundary(m: &mut String) {
    let trimmed = m.trim_end_matches(['\r', '\n']).len();
    m.truncate(trimmed);
    m.push_str("--\r\n");
}
