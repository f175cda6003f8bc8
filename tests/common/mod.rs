//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use auto_keepalive::config::AppConfig;
use auto_keepalive::HttpServer;

/// Bind an ephemeral port, start the server on it, return its address.
pub async fn spawn_server(config: AppConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::from_config(&config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A raw HTTP/1.1 client over a single TCP connection, so tests can observe
/// actual connection behavior rather than going through a pooling client.
pub struct RawClient {
    stream: TcpStream,
}

impl RawClient {
    pub async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        Self { stream }
    }

    /// Send one GET request and read the complete response
    /// (headers plus Content-Length body). Returns the raw response text.
    pub async fn get(&mut self, host: &str, path: &str, referer: Option<&str>) -> String {
        let mut request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\n");
        if let Some(referer) = referer {
            request.push_str(&format!("Referer: {referer}\r\n"));
        }
        request.push_str("\r\n");
        self.stream.write_all(request.as_bytes()).await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            if response_complete(&buf) {
                break;
            }
            let n = tokio::time::timeout(Duration::from_secs(5), self.stream.read(&mut chunk))
                .await
                .expect("timed out reading response")
                .unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        String::from_utf8_lossy(&buf).to_string()
    }

    /// True if the server has closed its side of the connection.
    /// A keep-alive connection stays open and this times out to false.
    pub async fn server_closed(&mut self) -> bool {
        let mut byte = [0u8; 1];
        matches!(
            tokio::time::timeout(Duration::from_secs(2), self.stream.read(&mut byte)).await,
            Ok(Ok(0))
        )
    }
}

/// Full response received: complete header block and, when a Content-Length
/// is announced, that many body bytes after it.
fn response_complete(buf: &[u8]) -> bool {
    let Some(end) = find_subsequence(buf, b"\r\n\r\n") else {
        return false;
    };
    let header_len = end + 4;
    let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    buf.len() >= header_len + content_length
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// True if the response's header block carries `Connection: close`.
pub fn has_close_header(response: &str) -> bool {
    let headers = response.split("\r\n\r\n").next().unwrap_or("");
    headers.to_lowercase().contains("connection: close")
}
