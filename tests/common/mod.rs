//! Shared test utilities: a throwaway HTTP responder and client helpers.

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use orderdesk::client::OrdersClient;

/// A canned HTTP response.
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A request as seen by the responder.
#[derive(Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Serves `responses` in order, one per connection, then stops.
///
/// Returns the base URL and a handle resolving to the recorded requests.
pub async fn serve(responses: Vec<Canned>) -> (String, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");

    let handle = tokio::spawn(async move {
        let mut recorded = Vec::new();
        for canned in responses {
            let (mut stream, _) = listener.accept().await.expect("accept failed");
            recorded.push(read_request(&mut stream).await);

            let response = format!(
                "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                canned.status,
                canned.body.len(),
                canned.body
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write failed");
            let _ = stream.shutdown().await;
        }
        recorded
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(stream: &mut TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.expect("read failed");
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.expect("read failed");
        assert!(n > 0, "connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let body =
        String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

    Recorded { method, path, body }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Builds a client for a local responder.
pub fn test_client(base_url: &str) -> OrdersClient {
    let tls = orderdesk::tls::build_tls_config(None).expect("failed to build TLS config");
    OrdersClient::new(base_url, tls).expect("failed to build client")
}

/// Minimal order JSON with the given id and status.
pub fn order_json(id: &str, status: &str) -> String {
    format!(
        r#"{{"_id":"{id}","customerName":"c{id}","customerPhone":"555","orderDate":"2024-03-09T18:42:07.512Z","totalPrice":10,"items":[],"status":"{status}"}}"#
    )
}

/// JSON array of orders built with [`order_json`].
pub fn orders_json(orders: &[(&str, &str)]) -> String {
    let items: Vec<String> = orders
        .iter()
        .map(|(id, status)| order_json(id, status))
        .collect();
    format!("[{}]", items.join(","))
}
