// ABOUTME: Dispatch requests addressed to worker control endpoints.
// ABOUTME: Each request carries its target, path, method, optional form body, headers and pre-delay.

use super::error::UnsupportedMethod;
use crate::fleet::Target;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "delete" => Ok(Method::Delete),
            _ => Err(UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worker control endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    DisconnectRoom,
    ConnectRoom { room_id: u64 },
    CustomCookie,
    SendSet,
    Quit,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::DisconnectRoom => "disconnectRoom",
            Endpoint::ConnectRoom { .. } => "connectRoom",
            Endpoint::CustomCookie => "customCookie",
            Endpoint::SendSet => "sendSet",
            Endpoint::Quit => "quit",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::CustomCookie | Endpoint::SendSet => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::ConnectRoom { room_id } => format!("/connectRoom?roomid={room_id}"),
            other => format!("/{}", other.name()),
        }
    }
}

/// Identity used to correlate outcomes with requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(u64);

impl RequestId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        RequestId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One HTTP call to one worker. Immutable once handed to the executor.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub id: RequestId,
    pub target: Target,
    pub path: String,
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    pub delay: Option<Duration>,
}

impl DispatchRequest {
    pub fn new(target: Target, endpoint: &Endpoint) -> Self {
        Self {
            id: RequestId::next(),
            target,
            path: endpoint.path_and_query(),
            method: endpoint.method(),
            body: None,
            headers: Vec::new(),
            delay: None,
        }
    }

    /// Attach a single url-encoded form field as the body.
    pub fn with_form(mut self, field: &str, value: &str) -> Self {
        self.body = Some(format!("{}={}", field, urlencoding::encode(value)));
        self.with_header("Content-Type", FORM_CONTENT_TYPE)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Suspend this request (and only this request) before it is sent.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = (!delay.is_zero()).then_some(delay);
        self
    }

    pub fn url(&self) -> String {
        self.target.url(&self.path)
    }

    pub fn reference(&self) -> RequestRef {
        RequestRef {
            id: self.id,
            target: self.target.clone(),
            method: self.method,
            url: self.url(),
        }
    }
}

/// The identifying part of a request, kept alongside its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRef {
    pub id: RequestId,
    pub target: Target,
    pub method: Method,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new("127.0.0.1", 23330)
    }

    #[test]
    fn endpoints_map_to_paths_and_methods() {
        assert_eq!(Endpoint::DisconnectRoom.path_and_query(), "/disconnectRoom");
        assert_eq!(
            Endpoint::ConnectRoom { room_id: 42 }.path_and_query(),
            "/connectRoom?roomid=42"
        );
        assert_eq!(Endpoint::Quit.path_and_query(), "/quit");
        assert_eq!(Endpoint::SendSet.method(), Method::Post);
        assert_eq!(Endpoint::CustomCookie.method(), Method::Post);
        assert_eq!(Endpoint::Quit.method(), Method::Get);
    }

    #[test]
    fn form_body_is_url_encoded() {
        let req = DispatchRequest::new(target(), &Endpoint::SendSet).with_form("set", "{\"a\": 1}");
        assert_eq!(req.body.as_deref(), Some("set=%7B%22a%22%3A%201%7D"));
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string())]
        );
    }

    #[test]
    fn headers_replace_case_insensitively() {
        let req = DispatchRequest::new(target(), &Endpoint::CustomCookie)
            .with_form("cookie", "x")
            .with_header("content-type", FORM_CONTENT_TYPE);
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn zero_delay_is_no_delay() {
        let req = DispatchRequest::new(target(), &Endpoint::SendSet).with_delay(Duration::ZERO);
        assert!(req.delay.is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = DispatchRequest::new(target(), &Endpoint::Quit);
        let b = DispatchRequest::new(target(), &Endpoint::Quit);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn url_includes_authority() {
        let req = DispatchRequest::new(target(), &Endpoint::ConnectRoom { room_id: 7 });
        assert_eq!(req.url(), "http://127.0.0.1:23330/connectRoom?roomid=7");
    }

    #[test]
    fn method_parsing() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!(
            "patch".parse::<Method>().unwrap_err(),
            UnsupportedMethod("patch".to_string())
        );
    }
}
