use anyhow::Context;
use chrono::Utc;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::{Body, Response};

/// Responses always state protocol version 1.0, whatever the request said.
const HTTP_VERSION: &str = "HTTP/1.0";

const SERVER: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// File bytes move from disk to the socket in blocks of this size.
const BLOCK_BUF_SIZE: usize = 64 * 1024;

/// Serializes the status line and the header set every outcome shares:
/// Date, Server, Connection: close, Content-Length when known, and the
/// fixed text/plain Content-Type.
pub fn serialize_headers(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");
    buf.extend_from_slice(format!("Date: {}\r\n", date).as_bytes());
    buf.extend_from_slice(format!("Server: {}\r\n", SERVER).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");

    if let Some(length) = resp.content_length {
        buf.extend_from_slice(format!("Content-Length: {}\r\n", length).as_bytes());
    }
    buf.extend_from_slice(b"Content-Type: text/plain\r\n");

    buf.extend_from_slice(b"\r\n");
    buf
}

pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    /// Writes headers and body to the stream, flushing before returning.
    ///
    /// A read or write failure mid-stream is an error for this connection;
    /// there is no partial-response recovery.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        stream.write_all(&serialize_headers(&self.response)).await?;

        match &self.response.body {
            Body::Empty => {}
            Body::Text(text) => {
                stream.write_all(text.as_bytes()).await?;
            }
            Body::File(info) => {
                let mut file = File::open(&info.path)
                    .await
                    .with_context(|| format!("failed to open {}", info.path.display()))?;
                let mut block = vec![0u8; BLOCK_BUF_SIZE];
                loop {
                    let n = file
                        .read(&mut block)
                        .await
                        .with_context(|| format!("failed to read {}", info.path.display()))?;
                    if n == 0 {
                        break;
                    }
                    stream
                        .write_all(&block[..n])
                        .await
                        .context("failed to write to socket")?;
                }
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
