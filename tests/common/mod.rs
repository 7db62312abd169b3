//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

/// Canned answer served by [`start_mock_origin`].
#[derive(Clone)]
pub struct MockReply {
    pub status_line: &'static str,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: &'static str,
}

impl MockReply {
    pub fn ok(headers: Vec<(&'static str, &'static str)>, body: &'static str) -> Self {
        Self { status_line: "200 OK", headers, body }
    }
}

/// Start a raw TCP origin that answers every request with `reply`.
///
/// Returns its address and the request lines it has received.
pub async fn start_mock_origin(reply: MockReply) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let reply = reply.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]);
                if let Some(line) = head.lines().next() {
                    log.lock().unwrap().push(line.to_string());
                }

                let mut response = format!("HTTP/1.1 {}\r\n", reply.status_line);
                for (name, value) in &reply.headers {
                    response.push_str(&format!("{}: {}\r\n", name, value));
                }
                response.push_str(&format!(
                    "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.body.len(),
                    reply.body
                ));
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, seen)
}

/// Start an origin that sends its head and `first` immediately, then holds
/// the connection open until the returned [`Notify`] fires before sending
/// `rest` and closing.
#[allow(dead_code)]
pub async fn start_held_origin(first: &'static str, rest: &'static str) -> (SocketAddr, Arc<Notify>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let release = Arc::new(Notify::new());
    let gate = release.clone();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;

            let head = "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n";
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(first.as_bytes()).await;
            let _ = socket.flush().await;

            gate.notified().await;
            let _ = socket.write_all(rest.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (addr, release)
}

/// Send a bare `GET path` to `addr` and return the raw response status line.
#[allow(dead_code)]
pub async fn raw_status_line(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut line = String::new();
    BufReader::new(stream).read_line(&mut line).await.unwrap();
    line.trim_end().to_string()
}
