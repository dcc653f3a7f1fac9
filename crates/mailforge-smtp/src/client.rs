//! SMTP submission client.

use crate::command::Command;
use crate::error::{Error, Result};
use crate::reply::{Reply, ReplyCode, is_last_reply_line, parse_reply};
use base64::Engine;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

/// SMTP client over a plain TCP connection.
///
/// Methods mirror the submission command sequence; each sends one command
/// and checks the server reply, surfacing rejections as [`Error::Smtp`].
#[derive(Debug)]
pub struct Client {
    stream: BufReader<TcpStream>,
}

impl Client {
    /// Connects to an SMTP server and reads the greeting.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or the server greets with
    /// an error reply.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).await?;
        let mut client = Self {
            stream: BufReader::new(stream),
        };

        let greeting = client.read_reply().await?;
        debug!(code = %greeting.code, "greeting");
        greeting.require_success()?;
        Ok(client)
    }

    /// Sends EHLO.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or is rejected.
    pub async fn ehlo(&mut self, hostname: &str) -> Result<Reply> {
        let reply = self
            .send_command(&Command::Ehlo {
                hostname: hostname.to_string(),
            })
            .await?;
        reply.require_success()
    }

    /// Authenticates with AUTH PLAIN.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the credentials.
    pub async fn auth_plain(&mut self, username: &str, password: &str) -> Result<()> {
        let credentials = format!("\0{username}\0{password}");
        let initial_response =
            base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());

        let reply = self
            .send_command(&Command::AuthPlain { initial_response })
            .await?;
        reply.require_success()?;
        Ok(())
    }

    /// Starts a mail transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender is rejected.
    pub async fn mail_from(&mut self, from: &str) -> Result<()> {
        let reply = self
            .send_command(&Command::MailFrom {
                from: from.to_string(),
            })
            .await?;
        reply.require_success()?;
        Ok(())
    }

    /// Adds a recipient to the transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipient is rejected.
    pub async fn rcpt_to(&mut self, to: &str) -> Result<()> {
        let reply = self
            .send_command(&Command::RcptTo { to: to.to_string() })
            .await?;
        reply.require_success()?;
        Ok(())
    }

    /// Begins message data. The server must answer 354.
    ///
    /// # Errors
    ///
    /// Returns an error if the DATA command is rejected.
    pub async fn data(&mut self) -> Result<()> {
        let reply = self.send_command(&Command::Data).await?;
        if reply.code != ReplyCode::START_DATA {
            return Err(Error::smtp(reply.code.as_u16(), reply.message_text()));
        }
        Ok(())
    }

    /// Sends the message content and completes the transaction.
    ///
    /// Line endings are normalized to CRLF, lines starting with `.` are
    /// byte-stuffed, and the terminating `.` line is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the server rejects the message.
    pub async fn send_message(&mut self, message: &[u8]) -> Result<()> {
        let mut lines = message.split(|&b| b == b'\n').peekable();
        while let Some(line) = lines.next() {
            // A trailing line terminator leaves one empty segment behind;
            // writing it would add a blank line the message never had.
            if lines.peek().is_none() && line.is_empty() {
                break;
            }

            let line = line.strip_suffix(b"\r").unwrap_or(line);

            if line.first() == Some(&b'.') {
                self.write_all(b".").await?;
            }
            self.write_all(line).await?;
            self.write_all(b"\r\n").await?;
        }
        self.write_all(b".\r\n").await?;

        let reply = self.read_reply().await?;
        debug!(code = %reply.code, "message accepted");
        reply.require_success()?;
        Ok(())
    }

    /// Sends QUIT and closes the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the QUIT command fails.
    pub async fn quit(mut self) -> Result<()> {
        let reply = self.send_command(&Command::Quit).await?;
        if !reply.is_success() && reply.code != ReplyCode::CLOSING {
            return Err(Error::smtp(reply.code.as_u16(), reply.message_text()));
        }
        Ok(())
    }

    async fn send_command(&mut self, cmd: &Command) -> Result<Reply> {
        self.write_all(cmd.serialize().as_bytes()).await?;
        let reply = self.read_reply().await?;
        debug!(command = cmd.verb(), code = %reply.code, "exchange");
        Ok(reply)
    }

    async fn read_reply(&mut self) -> Result<Reply> {
        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            let read = self.stream.read_line(&mut line).await?;
            if read == 0 {
                return Err(Error::Protocol("Connection closed by server".into()));
            }

            let line = line.trim_end().to_string();
            if line.is_empty() {
                continue;
            }

            let is_last = is_last_reply_line(&line);
            lines.push(line);
            if is_last {
                break;
            }
        }

        parse_reply(&lines)
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.stream.get_mut().write_all(data).await?;
        self.stream.get_mut().flush().await?;
        Ok(())
    }
}
