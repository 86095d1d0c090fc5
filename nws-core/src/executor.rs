//! Request executor: the single place outgoing calls are built, sent and
//! classified.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::{
    Configuration, Endpoint, Format, NwsError, Result,
    decode::decode,
    transport::{HttpRequest, Transport, TransportError},
};

#[derive(Debug)]
pub struct Executor {
    config: Configuration,
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub fn new(config: Configuration, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub(crate) fn set_user_agent(&mut self, user_agent: String) {
        self.config.user_agent = user_agent;
    }

    /// Base address + endpoint path + query string. A base path, if any,
    /// stays in front of the endpoint path.
    pub fn build_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)
            .ok()
            .filter(|u| u.has_host())
            .ok_or_else(|| NwsError::InvalidRequest("Invalid base URL".to_string()))?;

        let path = format!("{}{}", base.path().trim_end_matches('/'), endpoint.path());

        // set_path percent-encodes '?' and '#', so an identifier can never
        // spill into the query or fragment.
        let mut url = base;
        url.set_path(&path);
        url.set_fragment(None);

        match endpoint.query_items() {
            Some(params) => {
                url.query_pairs_mut().clear().extend_pairs(params.iter());
            }
            None => url.set_query(None),
        }

        Ok(url)
    }

    /// Performs the call and returns the body of a 2xx response untouched.
    pub async fn execute_raw(&self, endpoint: &Endpoint, format: Option<Format>) -> Result<Vec<u8>> {
        let url = self.build_url(endpoint)?;
        let accept = format.unwrap_or(self.config.default_format).mime();

        let request = HttpRequest {
            method: endpoint.method(),
            url,
            headers: vec![
                ("User-Agent".to_string(), self.config.user_agent.clone()),
                ("Accept".to_string(), accept.to_string()),
            ],
            timeout: self.config.timeout,
        };

        debug!(method = %request.method, url = %request.url, accept, "sending NWS request");

        let response = self.transport.send(request).await.map_err(|e| match e {
            TransportError::Network(cause) => NwsError::Network(cause),
            TransportError::InvalidResponse => NwsError::InvalidResponse,
        })?;

        debug!(status = response.status, bytes = response.body.len(), "NWS response received");

        match classify_status(response.status, &response.body) {
            Ok(()) => Ok(response.body),
            Err(err) => {
                warn!(path = %endpoint.path(), status = response.status, "NWS request failed: {err}");
                Err(err)
            }
        }
    }

    /// [`Executor::execute_raw`] followed by JSON decoding into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        format: Option<Format>,
    ) -> Result<T> {
        let bytes = self.execute_raw(endpoint, format).await?;
        decode(&bytes)
    }
}

/// Maps an HTTP status (and, for some codes, the body) onto the error
/// taxonomy. `Ok(())` means the body should be handed to the caller.
pub(crate) fn classify_status(status: u16, body: &[u8]) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(NwsError::Unauthorized),
        404 => Err(NwsError::NotFound),
        429 => Err(NwsError::RateLimitExceeded),
        400..=499 => Err(NwsError::InvalidRequest(
            problem_detail(body).unwrap_or_else(|| "Bad request".to_string()),
        )),
        500..=599 => Err(NwsError::Server {
            status,
            message: std::str::from_utf8(body).ok().map(str::to_string),
        }),
        _ => Err(NwsError::Unknown(None)),
    }
}

/// The `detail` string of an RFC 7807 problem document, if there is one.
fn problem_detail(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) => map.get("detail")?.as_str().map(str::to_string),
        _ => None,
    }
}
