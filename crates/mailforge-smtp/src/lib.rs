//! # mailforge-smtp
//!
//! A minimal SMTP client for message submission (RFC 5321).
//!
//! The client speaks exactly the command sequence a message submission
//! needs: EHLO, optional AUTH PLAIN, MAIL FROM, RCPT TO, DATA (with CRLF
//! normalization and leading-dot stuffing), QUIT. Connections are plain
//! TCP; TLS negotiation is out of scope for this crate.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailforge_smtp::Client;
//!
//! #[tokio::main]
//! async fn main() -> mailforge_smtp::Result<()> {
//!     let mut client = Client::connect("mail.example.com", 25).await?;
//!     client.ehlo("localhost").await?;
//!     client.auth_plain("user@example.com", "password").await?;
//!
//!     client.mail_from("sender@example.com").await?;
//!     client.rcpt_to("recipient@example.com").await?;
//!     client.data().await?;
//!     client.send_message(b"Subject: Test\r\n\r\nHello, World!\r\n").await?;
//!
//!     client.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`command`]: SMTP command builders
//! - [`client`]: Connection management and the submission client
//! - [`reply`]: Reply types and the response parser

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod client;
pub mod command;
mod error;
pub mod reply;

pub use client::Client;
pub use command::Command;
pub use error::{Error, Result};
pub use reply::{Reply, ReplyCode};
