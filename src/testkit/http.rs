//! One-shot HTTP responder for exercising real HTTP clients.
//!
//! Binds `127.0.0.1:0`, answers each accepted connection with the next
//! canned response, and records the request lines it saw.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A response written verbatim to the client.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            reason(self.status),
            self.content_type,
            self.body.len(),
            self.body
        )
        .into_bytes()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Status",
    }
}

/// Running responder.
pub struct Responder {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl Responder {
    /// Start answering with `responses`, one per connection, in order.
    ///
    /// # Panics
    ///
    /// Panics if the loopback listener cannot be bound.
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");

        let handle = tokio::spawn(async move {
            let mut seen = Vec::new();
            for response in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let head = read_head(&mut socket).await;
                seen.push(head.lines().next().unwrap_or_default().to_string());
                let _ = socket.write_all(&response.to_bytes()).await;
                let _ = socket.shutdown().await;
            }
            seen
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Wait for all canned responses to be served and return the request lines.
    ///
    /// # Panics
    ///
    /// Panics if the responder task panicked.
    pub async fn requests(self) -> Vec<String> {
        self.handle.await.expect("responder task")
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
