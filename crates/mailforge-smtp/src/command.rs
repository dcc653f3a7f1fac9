//! SMTP command builder.

use std::fmt;

/// SMTP command issued during a submission transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// EHLO - Extended greeting
    Ehlo {
        /// Client hostname
        hostname: String,
    },
    /// AUTH PLAIN with an initial SASL response
    AuthPlain {
        /// Base64-encoded `\0username\0password`
        initial_response: String,
    },
    /// MAIL FROM - Start mail transaction
    MailFrom {
        /// Sender address
        from: String,
    },
    /// RCPT TO - Add recipient
    RcptTo {
        /// Recipient address
        to: String,
    },
    /// DATA - Begin message data
    Data,
    /// QUIT - Close connection
    Quit,
}

impl Command {
    /// Serializes the command as a CRLF-terminated line.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!("{self}\r\n")
    }

    /// Returns the command verb, safe to log (no arguments, no
    /// credentials).
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Ehlo { .. } => "EHLO",
            Self::AuthPlain { .. } => "AUTH PLAIN",
            Self::MailFrom { .. } => "MAIL FROM",
            Self::RcptTo { .. } => "RCPT TO",
            Self::Data => "DATA",
            Self::Quit => "QUIT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ehlo { hostname } => write!(f, "EHLO {hostname}"),
            Self::AuthPlain { initial_response } => {
                write!(f, "AUTH PLAIN {initial_response}")
            }
            Self::MailFrom { from } => write!(f, "MAIL FROM:<{from}>"),
            Self::RcptTo { to } => write!(f, "RCPT TO:<{to}>"),
            Self::Data => write!(f, "DATA"),
            Self::Quit => write!(f, "QUIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ehlo_command() {
        let cmd = Command::Ehlo {
            hostname: "client.example.com".to_string(),
        };
        assert_eq!(cmd.serialize(), "EHLO client.example.com\r\n");
    }

    #[test]
    fn test_auth_plain_command() {
        let cmd = Command::AuthPlain {
            initial_response: "AHVzZXIAcGFzcw==".to_string(),
        };
        assert_eq!(cmd.serialize(), "AUTH PLAIN AHVzZXIAcGFzcw==\r\n");
    }

    #[test]
    fn test_mail_from_command() {
        let cmd = Command::MailFrom {
            from: "sender@example.com".to_string(),
        };
        assert_eq!(cmd.serialize(), "MAIL FROM:<sender@example.com>\r\n");
    }

    #[test]
    fn test_rcpt_to_command() {
        let cmd = Command::RcptTo {
            to: "recipient@example.com".to_string(),
        };
        assert_eq!(cmd.serialize(), "RCPT TO:<recipient@example.com>\r\n");
    }

    #[test]
    fn test_data_command() {
        assert_eq!(Command::Data.serialize(), "DATA\r\n");
    }

    #[test]
    fn test_quit_command() {
        assert_eq!(Command::Quit.serialize(), "QUIT\r\n");
    }

    #[test]
    fn test_verb_hides_arguments() {
        let cmd = Command::AuthPlain {
            initial_response: "c2VjcmV0".to_string(),
        };
        assert_eq!(cmd.verb(), "AUTH PLAIN");
    }
}
