//! # mailforge-mime
//!
//! RFC 5322 / MIME message composition library for email.
//!
//! ## Features
//!
//! - **Message composition**: Build single-part and multipart messages
//! - **Content-type derivation**: Plain, HTML, and alternative bodies
//! - **Attachments**: Base64-encoded parts with disposition metadata
//! - **Tokens**: Random MIME boundaries and Message-IDs
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailforge_mime::Message;
//!
//! let message = Message::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Test Message")
//!     .text_body("Hello, World!");
//!
//! println!("{}", message.to_rfc5322());
//! ```
//!
//! ### Alternative bodies
//!
//! Setting both a text and an HTML body yields a `multipart/alternative`
//! message with one boundary separating the two renderings:
//!
//! ```ignore
//! let message = Message::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Test")
//!     .text_body("Plain text version")
//!     .html_body("<html><body><h1>HTML version</h1></body></html>");
//! ```
//!
//! ### Attachments
//!
//! ```ignore
//! use mailforge_mime::{Attachment, Message};
//!
//! let attachment = Attachment::new(std::fs::read("document.pdf")?)
//!     .file_name("document.pdf")
//!     .content_type("application/pdf");
//!
//! let message = Message::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Document")
//!     .content_type("multipart/mixed")
//!     .text_body("Please find the attached document.")
//!     .attach(attachment);
//! ```
//!
//! Rendering is infallible: an incomplete descriptor (no recipients, no
//! subject) still produces a structurally valid message with the missing
//! headers empty. Validation is the caller's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod message;
mod render;

pub mod encoding;
pub mod token;

pub use attachment::Attachment;
pub use message::Message;
