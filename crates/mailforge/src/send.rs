//! Top-level send operations.

use crate::config::SmtpConfig;
use crate::error::Result;
use crate::transport::{SmtpTransport, Transport};
use mailforge_mime::Message;

/// Renders the message and delivers it via the configured SMTP server.
///
/// The envelope recipient list is `to`, then `cc`, then `bcc`, order
/// preserved; BCC addresses receive the message without ever appearing in
/// its headers.
///
/// # Errors
///
/// Returns an error if the transport fails (connection, authentication,
/// or rejection). Rendering itself cannot fail.
pub async fn send(config: &SmtpConfig, message: &Message) -> Result<()> {
    send_with(&SmtpTransport::new(config.clone()), message).await
}

/// Renders the message and delivers it via an injected transport.
///
/// # Errors
///
/// Returns whatever error the transport produces, unmodified.
pub async fn send_with(transport: &impl Transport, message: &Message) -> Result<()> {
    let recipients = message.envelope_recipients();
    let rendered = message.to_rfc5322();
    transport
        .deliver(&message.from, &recipients, rendered.as_bytes())
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    /// Transport that records what it was asked to deliver.
    #[derive(Default)]
    struct RecordingTransport {
        deliveries: Mutex<Vec<(String, Vec<String>, Vec<u8>)>>,
    }

    impl Transport for RecordingTransport {
        async fn deliver(&self, from: &str, recipients: &[&str], message: &[u8]) -> Result<()> {
            self.deliveries.lock().unwrap().push((
                from.to_string(),
                recipients.iter().map(ToString::to_string).collect(),
                message.to_vec(),
            ));
            Ok(())
        }
    }

    /// Transport that always fails with a fixed SMTP rejection.
    struct RejectingTransport;

    impl Transport for RejectingTransport {
        async fn deliver(&self, _: &str, _: &[&str], _: &[u8]) -> Result<()> {
            Err(mailforge_smtp::Error::smtp(554, "transaction failed").into())
        }
    }

    #[tokio::test]
    async fn test_envelope_includes_bcc_but_headers_do_not() {
        let transport = RecordingTransport::default();
        let message = Message::new()
            .from("a@x.com")
            .to("b@y.com")
            .cc("c@y.com")
            .bcc("hidden@z.com")
            .subject("Hi")
            .text_body("hello");

        send_with(&transport, &message).await.unwrap();

        let deliveries = transport.deliveries.lock().unwrap();
        let (from, recipients, bytes) = &deliveries[0];
        assert_eq!(from, "a@x.com");
        assert_eq!(recipients, &["b@y.com", "c@y.com", "hidden@z.com"]);

        let rendered = String::from_utf8(bytes.clone()).unwrap();
        assert!(!rendered.contains("hidden@z.com"));
        assert!(rendered.contains("To: b@y.com\r\n"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let message = Message::new().from("a@x.com").to("b@y.com");
        let err = send_with(&RejectingTransport, &message).await.unwrap_err();
        match err {
            Error::Smtp(mailforge_smtp::Error::Smtp { code, .. }) => assert_eq!(code, 554),
            other => panic!("expected Smtp error, got {other:?}"),
        }
    }
}
