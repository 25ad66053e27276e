//! The auth gate: bearer-token verification in front of the inventory API.
//!
//! [`AuthProvider`] is the seam: [`TokenAuth`] verifies signed tokens in
//! production, [`AllowAllAuth`] waves everything through for tests and
//! secretless development. Providers are constructed explicitly and passed
//! into the router state — no module-level singletons.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::{ServerError, ServerResult};
use crate::router::AppState;
use crate::token::TokenSigner;

/// Who a request is acting as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            name: "anonymous".into(),
        }
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == "anonymous"
    }
}

/// What a request presented.
#[derive(Clone, Debug)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

impl Credentials {
    /// Extract credentials from an `Authorization` header value, if any.
    fn from_header(header: Option<&str>) -> ServerResult<Self> {
        match header {
            None => Ok(Self::Anonymous),
            Some(value) => {
                let token = value
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| ServerError::Auth("expected a bearer token".into()))?;
                Ok(Self::Bearer(token.trim().to_string()))
            }
        }
    }
}

/// Verifies credentials into an identity.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
}

/// Accepts everything. For tests and secretless development only.
pub struct AllowAllAuth;

#[async_trait]
impl AuthProvider for AllowAllAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) => {
                Ok(Identity::user(format!("bearer:{}", &token[..8.min(token.len())])))
            }
            Credentials::Anonymous => Ok(Identity::anonymous()),
        }
    }
}

/// Verifies signed bearer tokens (see [`crate::token`]).
pub struct TokenAuth {
    signer: TokenSigner,
}

impl TokenAuth {
    pub fn new(signer: TokenSigner) -> Self {
        Self { signer }
    }
}

#[async_trait]
impl AuthProvider for TokenAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) => {
                let subject = self.signer.verify(token).map_err(|err| {
                    tracing::debug!(%err, "bearer token rejected");
                    ServerError::Auth(err.to_string())
                })?;
                Ok(Identity::user(subject))
            }
            Credentials::Anonymous => Ok(Identity::anonymous()),
        }
    }
}

async fn identity_from_parts(parts: &Parts, state: &AppState) -> ServerResult<Identity> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| ServerError::Auth("malformed authorization header".into())))
        .transpose()?;
    let credentials = Credentials::from_header(header)?;
    state.auth.authenticate(&credentials).await
}

/// Extractor for mutating handlers: a verified, non-anonymous identity.
pub struct Writer(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for Writer {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identity_from_parts(parts, state).await?;
        if identity.is_anonymous() {
            return Err(ServerError::Auth("authentication required".into()));
        }
        Ok(Self(identity))
    }
}

/// Extractor for read handlers: anonymous access is a config decision.
pub struct Reader(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for Reader {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identity_from_parts(parts, state).await?;
        if identity.is_anonymous() && !state.allow_anonymous_read {
            return Err(ServerError::Auth("authentication required".into()));
        }
        Ok(Self(identity))
    }
}
