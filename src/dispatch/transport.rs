// ABOUTME: HTTP transport to worker control endpoints.
// ABOUTME: HttpTransport opens one HTTP/1.1 connection per request using hyper over TCP.

use super::error::TransportError;
use super::outcome::Response;
use super::request::{DispatchRequest, Method};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use std::time::Duration;
use tokio::net::TcpStream;

/// Issues exactly one HTTP call per request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &DispatchRequest) -> Result<Response, TransportError>;
}

/// Plain HTTP/1.1 over TCP with a per-request deadline.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange(&self, request: &DispatchRequest) -> Result<Response, TransportError> {
        let stream = TcpStream::connect((request.target.ip.as_str(), request.target.port))
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake::<_, Full<Bytes>>(io)
            .await
            .map_err(|e| TransportError::Handshake(e.to_string()))?;

        // Spawn connection handler
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("worker connection error: {}", e);
            }
        });

        let mut builder = hyper::Request::builder()
            .method(hyper_method(request.method))
            .uri(&request.path)
            .header(hyper::header::HOST, request.target.authority());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = Full::new(Bytes::from(request.body.clone().unwrap_or_default()));
        let req = builder
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_bytes();

        Ok(Response {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &DispatchRequest) -> Result<Response, TransportError> {
        tokio::time::timeout(self.timeout, self.exchange(request))
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))?
    }
}

fn hyper_method(method: Method) -> hyper::Method {
    match method {
        Method::Get => hyper::Method::GET,
        Method::Post => hyper::Method::POST,
        Method::Put => hyper::Method::PUT,
        Method::Delete => hyper::Method::DELETE,
    }
}
