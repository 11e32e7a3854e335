//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use edge_prerender::config::PrerenderConfig;
use edge_prerender::edge::headers::{HOST, USER_AGENT};
use edge_prerender::edge::{EdgeEvent, EdgeRequest};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const RENDERER_DOMAIN: &str = "render.example.com";
pub const API_KEY: &str = "test-api-key";

/// Request head as seen by the mock renderer.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a programmable mock renderer on an ephemeral port.
///
/// `f` receives the 0-based call index and returns `(status, body)`.
pub async fn start_programmable_renderer<F, Fut>(f: F) -> (SocketAddr, Recorded)
where
    F: Fn(usize) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let rec = recorded.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let f = f.clone();
            let rec = rec.clone();
            tokio::spawn(async move {
                let Some(head) = read_head(&mut socket).await else {
                    return;
                };
                let index = {
                    let mut rec = rec.lock().unwrap();
                    rec.push(head);
                    rec.len() - 1
                };

                let (status, body) = f(index).await;
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, recorded)
}

/// Start a mock renderer that always answers the same way.
pub async fn start_fixed_renderer(status: u16, body: &'static str) -> (SocketAddr, Recorded) {
    start_programmable_renderer(move |_| async move { (status, body.to_string()) }).await
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let text = String::from_utf8_lossy(&buf);
    let mut lines = text.split("\r\n");
    let request_line = lines.next()?.to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    Some(RecordedRequest {
        request_line,
        headers,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Config pointing the render client at a local mock.
pub fn config_for(addr: SocketAddr) -> PrerenderConfig {
    let mut config = PrerenderConfig::default();
    config.renderer.domain = RENDERER_DOMAIN.to_string();
    config.renderer.api_key = API_KEY.to_string();
    config.renderer.endpoint = Some(format!("http://{}", addr));
    config.renderer.timeout_secs = 2;
    config.renderer.use_system_proxy = false;
    config
}

/// Viewer-request event as the edge platform would deliver it.
pub fn viewer_event(user_agent: &str, host: &str, uri: &str, querystring: &str) -> EdgeEvent {
    let mut request = EdgeRequest::new(uri, querystring)
        .with_header(USER_AGENT, user_agent)
        .with_header(HOST, host);
    request
        .extra
        .insert("method".to_string(), serde_json::Value::from("GET"));
    EdgeEvent::from_request(request)
}
