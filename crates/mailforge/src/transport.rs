//! Delivery capability and its SMTP implementation.

use crate::config::SmtpConfig;
use crate::error::Result;
use mailforge_smtp::Client;
use tracing::debug;

/// A capability that can deliver a rendered message to a set of envelope
/// recipients. The composition core never touches the network; anything
/// implementing this trait can carry its output.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Delivers `message` from `from` to every address in `recipients`.
    ///
    /// # Errors
    ///
    /// Returns a transport error (connection, authentication, rejection)
    /// unmodified from the underlying mechanism.
    async fn deliver(&self, from: &str, recipients: &[&str], message: &[u8]) -> Result<()>;
}

/// [`Transport`] over a single SMTP submission per delivery.
#[derive(Debug, Clone)]
pub struct SmtpTransport {
    config: SmtpConfig,
}

impl SmtpTransport {
    /// Creates a transport for the given server configuration.
    #[must_use]
    pub const fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

impl Transport for SmtpTransport {
    async fn deliver(&self, from: &str, recipients: &[&str], message: &[u8]) -> Result<()> {
        debug!(
            host = %self.config.host,
            port = self.config.port,
            recipients = recipients.len(),
            "delivering message"
        );

        let mut client = Client::connect(&self.config.host, self.config.port).await?;
        client.ehlo("localhost").await?;

        if let (Some(username), Some(password)) = (&self.config.username, &self.config.password) {
            if !username.is_empty() {
                client.auth_plain(username, password).await?;
            }
        }

        client.mail_from(from).await?;
        for recipient in recipients {
            client.rcpt_to(recipient).await?;
        }

        client.data().await?;
        client.send_message(message).await?;
        client.quit().await?;
        Ok(())
    }
}
