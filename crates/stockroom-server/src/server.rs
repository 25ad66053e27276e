use std::sync::Arc;

use stockroom_engine::InventoryService;
use tokio::net::TcpListener;

use crate::auth::{AllowAllAuth, AuthProvider, TokenAuth};
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::{build_router, AppState};
use crate::token::TokenSigner;

/// Build the auth gate the configuration asks for.
pub fn auth_provider(config: &ServerConfig) -> Arc<dyn AuthProvider> {
    match &config.token_secret {
        Some(secret) => Arc::new(TokenAuth::new(TokenSigner::new(secret))),
        None => {
            tracing::warn!("no token secret configured; accepting all credentials");
            Arc::new(AllowAllAuth)
        }
    }
}

/// Stockroom HTTP server.
pub struct StockroomServer {
    config: ServerConfig,
    state: AppState,
}

impl StockroomServer {
    /// Assemble a server over the given inventory service.
    pub fn new(config: ServerConfig, service: InventoryService) -> Self {
        let state = AppState {
            service,
            auth: auth_provider(&config),
            allow_anonymous_read: config.allow_anonymous_read,
        };
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("stockroom server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = StockroomServer::new(ServerConfig::default(), InventoryService::in_memory());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8470".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = StockroomServer::new(ServerConfig::default(), InventoryService::in_memory());
        let _router = server.router();
    }
}
