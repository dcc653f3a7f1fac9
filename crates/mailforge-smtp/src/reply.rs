//! SMTP reply types and response parsing.

use crate::error::{Error, Result};

/// SMTP reply from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Reply code (e.g., 250).
    pub code: ReplyCode,
    /// Reply message lines.
    pub message: Vec<String>,
}

impl Reply {
    /// Creates a new reply.
    #[must_use]
    pub const fn new(code: ReplyCode, message: Vec<String>) -> Self {
        Self { code, message }
    }

    /// Returns true if this is a success reply (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code.is_success()
    }

    /// Returns the full message as a single string.
    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.join("\n")
    }

    /// Converts an error reply into an [`Error::Smtp`].
    ///
    /// # Errors
    ///
    /// Returns the reply itself as an error when the code is not 2xx.
    pub fn require_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::smtp(self.code.as_u16(), self.message_text()))
        }
    }
}

/// SMTP reply code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReplyCode(u16);

impl ReplyCode {
    /// 221 Service closing transmission channel
    pub const CLOSING: Self = Self(221);
    /// 354 Start mail input
    pub const START_DATA: Self = Self(354);

    /// Creates a new reply code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if this is a success code (2xx).
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is an intermediate code (3xx).
    #[must_use]
    pub const fn is_intermediate(self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl std::fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an SMTP reply from response lines.
///
/// Replies are single-line (`250 OK`) or multi-line, where continuation
/// lines use a `-` separator and the last line a space
/// (`250-First`, `250 Last`).
///
/// # Errors
///
/// Returns an error if the reply is empty or malformed.
pub fn parse_reply(lines: &[String]) -> Result<Reply> {
    let first = lines
        .first()
        .ok_or_else(|| Error::Protocol("Empty reply".into()))?;
    if first.len() < 3 {
        return Err(Error::Protocol(format!("Reply too short: {first}")));
    }

    let code = first
        .get(0..3)
        .and_then(|digits| digits.parse::<u16>().ok())
        .ok_or_else(|| Error::Protocol(format!("Invalid reply code: {first}")))?;

    let mut message = Vec::new();
    for line in lines {
        if line.len() == 3 {
            message.push(String::new());
        } else if let Some(text) = line.get(4..) {
            // Covers the bare continuation `250-` (empty textstring) and
            // guards against a separator byte that starts a multi-byte
            // character.
            message.push(text.to_string());
        } else {
            return Err(Error::Protocol(format!("Malformed reply line: {line}")));
        }
    }

    Ok(Reply::new(ReplyCode::new(code), message))
}

/// Checks if a line terminates a (possibly multi-line) reply.
#[must_use]
pub fn is_last_reply_line(line: &str) -> bool {
    line.len() == 3 || (line.len() >= 4 && line.as_bytes()[3] == b' ')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line_reply() {
        let lines = vec!["250 OK".to_string()];
        let reply = parse_reply(&lines).unwrap();
        assert_eq!(reply.code.as_u16(), 250);
        assert_eq!(reply.message, vec!["OK"]);
        assert!(reply.is_success());
    }

    #[test]
    fn test_parse_multi_line_reply() {
        let lines = vec![
            "250-mail.example.com".to_string(),
            "250-AUTH PLAIN LOGIN".to_string(),
            "250 8BITMIME".to_string(),
        ];
        let reply = parse_reply(&lines).unwrap();
        assert_eq!(reply.code.as_u16(), 250);
        assert_eq!(reply.message.len(), 3);
        assert_eq!(reply.message_text(), "mail.example.com\nAUTH PLAIN LOGIN\n8BITMIME");
    }

    #[test]
    fn test_parse_bare_code() {
        let lines = vec!["354".to_string()];
        let reply = parse_reply(&lines).unwrap();
        assert_eq!(reply.code, ReplyCode::START_DATA);
        assert_eq!(reply.message, vec![String::new()]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_reply(&[]).is_err());
        assert!(parse_reply(&["25".to_string()]).is_err());
        assert!(parse_reply(&["ABC OK".to_string()]).is_err());
    }

    #[test]
    fn test_parse_multibyte_separator_is_error_not_panic() {
        // A 4th byte that starts a multi-byte character must surface as a
        // protocol error, even when a well-formed last line follows.
        let lines = vec!["250€xyz".to_string(), "250 ok".to_string()];
        assert!(matches!(parse_reply(&lines), Err(Error::Protocol(_))));

        let lines = vec!["25€ not a code".to_string()];
        assert!(matches!(parse_reply(&lines), Err(Error::Protocol(_))));
    }

    #[test]
    fn test_parse_bare_continuation_line() {
        let lines = vec!["250-".to_string(), "250 ok".to_string()];
        let reply = parse_reply(&lines).unwrap();
        assert_eq!(reply.message, vec![String::new(), "ok".to_string()]);
    }

    #[test]
    fn test_is_last_reply_line() {
        assert!(is_last_reply_line("250 OK"));
        assert!(is_last_reply_line("354"));
        assert!(!is_last_reply_line("250-Continuing"));
    }

    #[test]
    fn test_require_success() {
        let ok = Reply::new(ReplyCode::new(250), vec!["OK".to_string()]);
        assert!(ok.require_success().is_ok());

        let rejected = Reply::new(ReplyCode::new(550), vec!["no".to_string()]);
        match rejected.require_success() {
            Err(Error::Smtp { code, message }) => {
                assert_eq!(code, 550);
                assert_eq!(message, "no");
            }
            other => panic!("expected Smtp error, got {other:?}"),
        }
    }

    #[test]
    fn test_reply_code_classes() {
        assert!(ReplyCode::new(220).is_success());
        assert!(ReplyCode::CLOSING.is_success());
        assert!(ReplyCode::START_DATA.is_intermediate());
        assert!(!ReplyCode::new(550).is_success());
    }
}
