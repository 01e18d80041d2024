//! Authenticated session for ACT API operations.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use act_core::Result;
use act_core::claims::TokenClaims;
use act_core::credentials::Credentials;
use act_core::error::AuthError;
use act_core::store::TokenStore;
use act_core::tokens::{AccessToken, RefreshToken};
use act_core::types::ApiUrl;

use crate::client::{RequestSpec, RestClient};
use crate::endpoints::{
    REGISTER, TOKEN, TOKEN_REFRESH, RegisterRequest, TokenRefreshRequest, TokenRefreshResponse,
    TokenRequest, TokenResponse,
};

/// A refresh in flight, shared by every caller that needs its outcome.
type PendingRefresh = Shared<BoxFuture<'static, Option<AccessToken>>>;

/// A session against the ACT platform API.
///
/// The session does not hold tokens itself: the durable
/// [`TokenStore`] is the single source of truth, re-read before every
/// request so that a token refreshed elsewhere (another handle, another
/// process sharing the store) is picked up immediately.
///
/// On a 401 the session refreshes the access token and retries the original
/// request exactly once. Concurrent refreshes are coalesced: one network
/// call is made and every waiter receives its outcome.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use an internal `Arc`) and safe to
/// share across tasks.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use act_core::{ApiUrl, Credentials};
/// use act_rest::Session;
///
/// # async fn example(store: Arc<dyn act_core::TokenStore>) -> act_core::Result<()> {
/// let api = ApiUrl::new("https://act.example/api")?;
/// let session = Session::new(api, store);
/// session
///     .login(&Credentials::with_email("a@b.com", "secret"))
///     .await?;
/// let assets = session.assets().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: RestClient,
    store: Arc<dyn TokenStore>,
    pending_refresh: Mutex<Option<PendingRefresh>>,
}

impl Session {
    /// Create a session for the given API, backed by the given token store.
    pub fn new(api: ApiUrl, store: Arc<dyn TokenStore>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                client: RestClient::new(api),
                store,
                pending_refresh: Mutex::new(None),
            }),
        }
    }

    /// Returns the API base URL for this session.
    pub fn api(&self) -> &ApiUrl {
        self.inner.client.base()
    }

    /// Authenticate and persist the returned token pair.
    ///
    /// # Errors
    ///
    /// Any non-success status from the token endpoint fails with
    /// [`AuthError::CredentialsRejected`].
    #[instrument(skip(self, credentials), fields(api = %self.inner.client.base()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        info!("logging in");

        let body = TokenRequest {
            username: credentials.username(),
            email: credentials.email(),
            password: credentials.password(),
        };
        let spec = RequestSpec::post(TOKEN, &body)?.public();

        let response = self.inner.client.send(&spec, None).await?;
        let status = response.status();
        if !status.is_success() {
            let error = RestClient::parse_error_response(response).await;
            return Err(AuthError::CredentialsRejected {
                status: status.as_u16(),
                detail: error.detail,
            }
            .into());
        }

        let tokens: TokenResponse = self.inner.client.read_json(response).await?;
        let access = AccessToken::new(tokens.access);
        let refresh = tokens.refresh.map(RefreshToken::new);
        self.inner
            .store
            .put_tokens(&access, refresh.as_ref())
            .await?;

        debug!("login succeeded, tokens persisted");
        Ok(())
    }

    /// Register a new user account.
    ///
    /// Returns the server's response body as JSON.
    #[instrument(skip(self, password), fields(api = %self.inner.client.base()))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<serde_json::Value> {
        let body = RegisterRequest {
            username,
            email,
            password,
            role,
        };
        let spec = RequestSpec::post(REGISTER, &body)?.public();
        self.execute(spec).await
    }

    /// Obtain a fresh access token using the stored refresh token.
    ///
    /// Returns `None` without touching the network when no refresh token is
    /// stored, and `None` when the refresh endpoint rejects the exchange
    /// (prior state is left untouched). On success the new token is
    /// persisted and returned.
    ///
    /// Concurrent calls while a refresh is in flight share the single
    /// in-flight request; all of them observe the same outcome.
    pub async fn refresh(&self) -> Option<AccessToken> {
        let fut = {
            let mut pending = self.inner.pending_refresh.lock().await;
            match pending.as_ref() {
                Some(fut) => fut.clone(),
                None => {
                    let this = self.clone();
                    let fut: PendingRefresh =
                        async move { this.run_refresh().await }.boxed().shared();
                    *pending = Some(fut.clone());
                    fut
                }
            }
        };

        let result = fut.clone().await;

        // Clear the slot once settled, unless a newer refresh already took it.
        let mut pending = self.inner.pending_refresh.lock().await;
        if pending.as_ref().is_some_and(|p| Shared::ptr_eq(p, &fut)) {
            *pending = None;
        }

        result
    }

    #[instrument(skip(self), fields(api = %self.inner.client.base()))]
    async fn run_refresh(&self) -> Option<AccessToken> {
        info!("refreshing access token");

        let refresh = match self.inner.store.refresh_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("no refresh token stored, skipping refresh");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read refresh token from store");
                return None;
            }
        };

        let body = TokenRefreshRequest {
            refresh: refresh.as_str(),
        };
        let spec = match RequestSpec::post(TOKEN_REFRESH, &body) {
            Ok(spec) => spec.public(),
            Err(e) => {
                warn!(error = %e, "failed to build refresh request");
                return None;
            }
        };

        let response = match self.inner.client.send(&spec, None).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "token refresh request failed");
                return None;
            }
        };

        let tokens: TokenRefreshResponse = match self.inner.client.read_json(response).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "token refresh rejected");
                return None;
            }
        };

        let access = AccessToken::new(tokens.access);
        let rotated = tokens.refresh.map(RefreshToken::new);

        let persisted = match rotated {
            Some(ref rotated) => self.inner.store.put_tokens(&access, Some(rotated)).await,
            None => self.inner.store.put_access_token(&access).await,
        };
        if let Err(e) = persisted {
            warn!(error = %e, "failed to persist refreshed token");
            return None;
        }

        debug!("access token refreshed");
        Some(access)
    }

    /// Perform a request, refreshing and retrying once on 401.
    ///
    /// Returns the raw response; use [`Session::execute`] for a decoded
    /// body. The access token is re-read from the store for the initial
    /// attempt, and the retry uses the token the refresh yielded.
    pub async fn send(&self, spec: &RequestSpec) -> Result<reqwest::Response> {
        let token = if spec.requires_auth {
            self.inner.store.access_token().await?
        } else {
            None
        };

        let response = self.inner.client.send(spec, token.as_ref()).await?;

        if spec.requires_auth && response.status() == StatusCode::UNAUTHORIZED {
            debug!(path = %spec.path, "request returned 401, attempting refresh");
            return match self.refresh().await {
                Some(access) => self.inner.client.send(spec, Some(&access)).await,
                None => Err(AuthError::SessionExpired.into()),
            };
        }

        Ok(response)
    }

    /// Perform a request and decode its JSON body.
    pub async fn execute<R: DeserializeOwned>(&self, spec: RequestSpec) -> Result<R> {
        let response = self.send(&spec).await?;
        self.inner.client.read_json(response).await
    }

    /// Decode the claims of the stored access token, if any.
    pub async fn claims(&self) -> Result<Option<TokenClaims>> {
        match self.inner.store.access_token().await? {
            Some(token) => Ok(Some(token.claims()?)),
            None => Ok(None),
        }
    }

    /// Returns true if an access token is currently stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.inner.store.access_token().await?.is_some())
    }

    /// Clear the stored session tokens.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        info!("clearing session");
        self.inner.store.clear().await
    }
}

// Custom Debug impl that hides the store contents
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api", self.inner.client.base())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
