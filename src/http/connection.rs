use std::sync::Arc;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::handler;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    config: Arc<Config>,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            config,
        }
    }

    /// Drives one request/response cycle; the socket closes when the
    /// connection drops.
    ///
    /// Parse and I/O failures abort only this connection. The caller logs
    /// them and moves on; the acceptor never sees them.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let request = match self.read_request().await? {
            Some(request) => request,
            // Peer closed without sending anything.
            None => return Ok(()),
        };

        let response = handler::respond_to(&request, &self.config.docroot).await;

        let mut writer = ResponseWriter::new(response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    if !self.buffer.is_empty() {
                        // One exchange per connection; bytes past the
                        // declared body are garbage.
                        anyhow::bail!(
                            "{} stray bytes after the request body",
                            self.buffer.len()
                        );
                    }
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }

                Err(e) => {
                    anyhow::bail!("HTTP parse error: {:?}", e);
                }
            }

            let mut temp = [0u8; 1024];
            let n = self
                .stream
                .read(&mut temp)
                .await
                .context("failed to read from socket")?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                anyhow::bail!("unexpected end of stream mid-request");
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
