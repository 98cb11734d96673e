//! Client implementation for the Roam geofencing API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use roam_core::config::ClientOptions;
use roam_core::error::{RoamError, RoamResult};
use roam_core::traits::{ApiRequest, Transport};
use roam_core::types::{Hook, Point};

use crate::http::HttpTransport;

/// Client for the Roam API.
///
/// Holds only the token, user agent and transport; every operation is a
/// single stateless round trip, so the client can be shared freely.
#[derive(Clone)]
pub struct RoamClient {
    token: String,
    user_agent: String,
    base_url: String,
    transport: Arc<dyn Transport>,
}

#[derive(Debug, Deserialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Debug, Deserialize)]
struct HooksResponse {
    ok: bool,
    // A service with no hooks may send `null` here.
    #[serde(default)]
    hooks: Option<Vec<Hook>>,
}

impl std::fmt::Debug for RoamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoamClient")
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RoamClient {
    /// Create a new client with default options.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_options(token, ClientOptions::default())
    }

    /// Create a new client with options.
    pub fn with_options(token: impl Into<String>, options: ClientOptions) -> Self {
        let transport = HttpTransport::new(options.effective_timeout());
        Self::with_transport(token, options, Arc::new(transport))
    }

    /// Create a new client that sends requests through `transport`.
    ///
    /// The timeout in `options` is ignored here; it is the transport's job.
    pub fn with_transport(
        token: impl Into<String>,
        options: ClientOptions,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            token: token.into(),
            user_agent: options.effective_user_agent().to_string(),
            base_url: options.effective_base_url().to_string(),
            transport,
        }
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create or overwrite a point.
    pub async fn set_point(&self, point: &Point) -> RoamResult<bool> {
        let mut params = vec![
            ("lat", point.lat.to_string()),
            ("lon", point.lon.to_string()),
            ("id", point.id.clone()),
        ];
        if point.has_meta() {
            params.push(("meta", point.meta.clone()));
        }

        let result: OkResponse = self.call("/setpoint", &params).await?;
        if !result.ok {
            warn!(id = %point.id, "Roam rejected point");
        }
        Ok(result.ok)
    }

    /// Create or overwrite a geofence hook.
    ///
    /// `hook.filter` is not sent; the endpoint takes name, meters, match and
    /// endpoint only.
    pub async fn set_hook(&self, hook: &Hook) -> RoamResult<bool> {
        let params = [
            ("name", hook.name.clone()),
            ("meters", hook.meters.clone()),
            ("match", hook.match_pattern.clone()),
            ("endpoint", hook.endpoint.clone()),
        ];

        let result: OkResponse = self.call("/sethook", &params).await?;
        if !result.ok {
            warn!(hook = %hook.name, "Roam rejected hook");
        }
        Ok(result.ok)
    }

    /// Delete a geofence hook by name.
    pub async fn delete_hook(&self, name: &str) -> RoamResult<bool> {
        let result: OkResponse = self.call("/delhook", &[("name", name.to_string())]).await?;
        if !result.ok {
            warn!(hook = name, "Roam failed to delete hook");
        }
        Ok(result.ok)
    }

    /// List active hooks, in the order the service returns them.
    pub async fn hooks(&self) -> RoamResult<Vec<Hook>> {
        let result: HooksResponse = self.call("/hooks", &[]).await?;
        if !result.ok {
            warn!("Roam reported failure listing hooks");
        }
        Ok(result.hooks.unwrap_or_default())
    }

    /// Build the GET request for `path` with the given query parameters.
    fn build_request(&self, path: &str, params: &[(&str, String)]) -> RoamResult<ApiRequest> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let mut authorization = HeaderValue::from_str(&format!("token {}", self.token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);

        Ok(ApiRequest::get(url, headers))
    }

    async fn call<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> RoamResult<T> {
        let request = self.build_request(path, params)?;
        debug!(method = %request.method, path, "Sending Roam request");

        let response = self.transport.send(request).await?;
        debug!(status = response.status, path, "Received Roam response");
        if !response.is_success() {
            warn!(status = response.status, path, "Roam returned non-success status");
        }

        decode_first(&response.body).map_err(|e| RoamError::decode(e, Some(response.status)))
    }
}

/// Decode the first JSON value in `body`, ignoring anything after it.
fn decode_first<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_str(body).into_iter::<T>().next() {
        Some(result) => result,
        None => serde_json::from_str(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roam_core::error::ErrorCode;
    use roam_core::traits::ApiResponse;

    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn send(&self, _request: ApiRequest) -> RoamResult<ApiResponse> {
            Err(RoamError::transport("unreachable"))
        }
    }

    fn client(options: ClientOptions) -> RoamClient {
        RoamClient::with_transport("asdf1234", options, Arc::new(Unreachable))
    }

    #[test]
    fn test_build_request_headers() {
        let client = client(ClientOptions::default());
        let request = client.build_request("/hooks", &[]).unwrap();

        assert_eq!(request.url.as_str(), "https://api.tile38.com/hooks");
        assert_eq!(request.header("authorization"), Some("token asdf1234"));
        assert_eq!(request.header("user-agent"), Some("roam-client"));
        assert!(request.headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_build_request_encodes_query_values() {
        let client = client(ClientOptions::default());
        let request = client
            .build_request("/setpoint", &[("id", "a b".to_string()), ("meta", "x&y#z".to_string())])
            .unwrap();

        assert_eq!(request.url.query(), Some("id=a+b&meta=x%26y%23z"));
        assert_eq!(request.query_param("meta").as_deref(), Some("x&y#z"));
    }

    #[test]
    fn test_build_request_bad_base_url() {
        let client = client(ClientOptions::builder().base_url("not a url").build());
        let err = client.build_request("/hooks", &[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ReqInvalidUrl);
    }

    #[test]
    fn test_build_request_bad_token() {
        let client = RoamClient::with_transport(
            "line\nbreak",
            ClientOptions::default(),
            Arc::new(Unreachable),
        );
        let err = client.build_request("/hooks", &[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ReqInvalidHeader);
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = client(ClientOptions::default());
        let output = format!("{:?}", client);
        assert!(!output.contains("asdf1234"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    fn test_construction_never_touches_network() {
        let client = RoamClient::new("asdf1234");
        assert_eq!(client.user_agent(), "roam-client");
        assert_eq!(client.base_url(), "https://api.tile38.com");
    }
}
