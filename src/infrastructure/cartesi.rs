use hyper::client::HttpConnector;
use hyper::{Body, Client, Method, Request};
use std::error::Error;
use tracing::debug;

/// Kind of output emitted to the rollup HTTP server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Verifiable on the base layer. Used for committed notarisations.
    Notice,
    /// Not verifiable. Used for query results and soft failures.
    Report,
}

impl OutputKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            OutputKind::Notice => "notice",
            OutputKind::Report => "report",
        }
    }
}

/// Wrap a JSON payload in the rollup envelope: `{"payload": "<hex>"}`
pub fn envelope(payload: &str) -> String {
    json::object! {
        "payload" => hex::encode(payload)
    }
    .dump()
}

/// Post an output to `{server_url}/{notice|report}`
///
/// # Arguments
/// * `client` - Hyper HTTP client
/// * `server_url` - Base URL of the rollup server (e.g., "http://127.0.0.1:5004")
/// * `kind` - Notice or report
/// * `payload` - JSON string to send (will be hex-encoded)
pub async fn send_output(
    client: &Client<HttpConnector>,
    server_url: &str,
    kind: OutputKind,
    payload: &str,
) -> Result<(), Box<dyn Error>> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{}/{}", server_url, kind.endpoint()))
        .header("content-type", "application/json")
        .body(Body::from(envelope(payload)))?;

    let response = client.request(request).await?;

    if !response.status().is_success() {
        return Err(format!("Failed to send {}: HTTP {}", kind.endpoint(), response.status()).into());
    }

    debug!(kind = kind.endpoint(), "output sent");
    Ok(())
}

pub async fn send_notice(
    client: &Client<HttpConnector>,
    server_url: &str,
    payload: &str,
) -> Result<(), Box<dyn Error>> {
    send_output(client, server_url, OutputKind::Notice, payload).await
}

pub async fn send_report(
    client: &Client<HttpConnector>,
    server_url: &str,
    payload: &str,
) -> Result<(), Box<dyn Error>> {
    send_output(client, server_url, OutputKind::Report, payload).await
}
