//! # mailforge
//!
//! Compose RFC 5322 / MIME emails and deliver them over SMTP.
//!
//! This crate ties the composition core ([`mailforge_mime`]) to a
//! transport: build a [`Message`], point an [`SmtpConfig`] at a server,
//! and [`send`] it. The [`Transport`] trait is the seam for swapping the
//! SMTP client out for anything else that can deliver bytes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailforge::{Message, SmtpConfig};
//!
//! #[tokio::main]
//! async fn main() -> mailforge::Result<()> {
//!     let message = Message::new()
//!         .from("sender@example.com")
//!         .to("recipient@example.com")
//!         .subject("Hello")
//!         .text_body("Hello, World!");
//!
//!     let config = SmtpConfig::new("mail.example.com", 25)
//!         .credentials("sender@example.com", "password");
//!
//!     mailforge::send(&config, &message).await
//! }
//! ```
//!
//! ## Attachments
//!
//! ```ignore
//! use mailforge::{Message, load_attachment};
//!
//! let attachment = load_attachment("report.pdf")
//!     .await?
//!     .content_type("application/pdf");
//!
//! let message = Message::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Report")
//!     .content_type("multipart/mixed")
//!     .text_body("Report attached.")
//!     .attach(attachment);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attach;
mod config;
mod error;
mod send;
mod transport;

pub use attach::load_attachment;
pub use config::SmtpConfig;
pub use error::{Error, Result};
pub use send::{send, send_with};
pub use transport::{SmtpTransport, Transport};

pub use mailforge_mime::{Attachment, Message};
