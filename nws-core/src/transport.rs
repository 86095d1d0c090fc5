//! The seam between the request executor and the network.

use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};
use thiserror::Error;
use url::Url;

use crate::{endpoint::HttpMethod, error::BoxError};

/// A fully composed outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(#[source] BoxError),

    /// A response came back without a usable status line.
    #[error("response carried no usable status")]
    InvalidResponse,
}

/// Performs one HTTP exchange. Implementations must not retry or follow
/// up on the response; status handling belongs to the executor.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let res = builder
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| TransportError::Network(Box::new(e)))?;

        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|e| TransportError::Network(Box::new(e)))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// In-memory transport for offline tests: replies with queued canned
/// responses and records every request it sees.
#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    };

    pub(crate) enum Reply {
        Response(HttpResponse),
        NetworkFailure(&'static str),
        Malformed,
    }

    #[derive(Clone, Default)]
    pub(crate) struct StubTransport {
        replies: Arc<Mutex<VecDeque<Reply>>>,
        seen: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl Debug for StubTransport {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("StubTransport").finish_non_exhaustive()
        }
    }

    impl StubTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn reply(self, status: u16, body: &str) -> Self {
            self.push(Reply::Response(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }))
        }

        pub(crate) fn reply_bytes(self, status: u16, body: &[u8]) -> Self {
            self.push(Reply::Response(HttpResponse {
                status,
                body: body.to_vec(),
            }))
        }

        pub(crate) fn fail(self, message: &'static str) -> Self {
            self.push(Reply::NetworkFailure(message))
        }

        pub(crate) fn malformed(self) -> Self {
            self.push(Reply::Malformed)
        }

        fn push(self, reply: Reply) -> Self {
            self.replies.lock().unwrap().push_back(reply);
            self
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.seen.lock().unwrap().clone()
        }

        pub(crate) fn paths(&self) -> Vec<String> {
            self.requests()
                .iter()
                .map(|r| r.url.path().to_string())
                .collect()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request);

            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(Reply::Response(response)) => Ok(response),
                Some(Reply::NetworkFailure(message)) => Err(TransportError::Network(message.into())),
                Some(Reply::Malformed) => Err(TransportError::InvalidResponse),
                None => Err(TransportError::Network("no stubbed reply left".into())),
            }
        }
    }
}
