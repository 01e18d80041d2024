//! HTTP client for the ACT REST API.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use act_core::Result;
use act_core::error::{DecodeError, Error, StatusError, TokenError, TransportError};
use act_core::tokens::AccessToken;
use act_core::types::ApiUrl;

use crate::endpoints::ApiErrorBody;

/// HTTP request timeout. Long enough for the AI endpoints, short enough to
/// fail fast when the server is unreachable.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A single API request to perform.
///
/// Specs are ephemeral: the typed API layer builds one per call and hands it
/// to the session for execution.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub requires_auth: bool,
}

impl RequestSpec {
    /// An authenticated GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
            requires_auth: true,
        }
    }

    /// An authenticated POST request with a JSON body.
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        let body = serde_json::to_value(body).map_err(|e| DecodeError::Body {
            message: format!("failed to serialize request body: {}", e),
        })?;
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            requires_auth: true,
        })
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Mark the request as not requiring authentication. No authorization
    /// header will be attached even when a token is stored.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// Low-level HTTP client: builds headers, sends requests, maps errors.
///
/// Clone is cheap; `reqwest::Client` shares its connection pool internally.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: ApiUrl,
}

impl RestClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: ApiUrl) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("act/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self { http, base }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Build the headers for a request.
    ///
    /// Content-type and accept are always JSON. The bearer header is added
    /// only when a token is supplied; callers pass `None` for requests that
    /// do not require authentication, and for missing tokens the header is
    /// simply omitted (the server answers 401).
    pub fn build_headers(&self, token: Option<&AccessToken>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(
                |_| TokenError::Malformed {
                    reason: "token contains characters not valid in a header".to_string(),
                },
            )?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Send a request, attaching the token only when the request requires
    /// auth.
    ///
    /// Returns the raw response; status checking happens in
    /// [`RestClient::read_json`].
    #[instrument(skip(self, token), fields(method = %spec.method, path = %spec.path))]
    pub(crate) async fn send(
        &self,
        spec: &RequestSpec,
        token: Option<&AccessToken>,
    ) -> Result<reqwest::Response> {
        // Enforced here as well as at the call site: a request that does not
        // require auth never carries a bearer header.
        let token = if spec.requires_auth { token } else { None };

        let url = self.base.endpoint(&spec.path);
        debug!(%url, "sending API request");
        trace!(query = ?spec.query, "query parameters");

        let mut request = self
            .http
            .request(spec.method.clone(), &url)
            .headers(self.build_headers(token)?);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(ref body) = spec.body {
            request = request.json(body);
        }

        request.send().await.map_err(map_reqwest_error)
    }

    /// Read a response: parse the body on success, or surface a status error
    /// carrying the server's error fields.
    pub(crate) async fn read_json<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            response.json::<R>().await.map_err(map_reqwest_error)
        } else {
            Err(Self::parse_error_response(response).await.into())
        }
    }

    /// Parse a non-success response body into a status error.
    pub(crate) async fn parse_error_response(response: reqwest::Response) -> StatusError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorBody>().await {
            Ok(body) => {
                let detail = body.detail();
                StatusError::new(status, body.code, detail)
            }
            Err(_) => StatusError::new(status, None, None),
        }
    }
}

/// Map reqwest failures into the client error taxonomy.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::Decode(DecodeError::Body {
            message: err.to_string(),
        })
    } else if err.is_timeout() {
        Error::Transport(TransportError::Timeout {
            message: err.to_string(),
        })
    } else if err.is_connect() {
        Error::Transport(TransportError::Connection {
            message: err.to_string(),
        })
    } else {
        Error::Transport(TransportError::Http {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestClient {
        RestClient::new(ApiUrl::new("https://act.example/api").unwrap())
    }

    #[test]
    fn headers_without_token_are_json_only() {
        let headers = client().build_headers(None).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn headers_with_token_carry_exact_bearer_value() {
        let token = AccessToken::new("tokA");
        let headers = client().build_headers(Some(&token)).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tokA");
    }

    #[test]
    fn header_rejects_unencodable_token() {
        let token = AccessToken::new("bad\ntoken");
        assert!(client().build_headers(Some(&token)).is_err());
    }

    #[test]
    fn public_spec_never_requires_auth() {
        let spec = RequestSpec::get("assets/").public();
        assert!(!spec.requires_auth);
    }
}
