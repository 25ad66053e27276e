//! HTTP server for Stockroom.
//!
//! Exposes the inventory service over a REST API with bearer-token
//! authentication. This crate is deliberately thin: request parsing, the
//! auth gate, and error-to-status translation live here; every consistency
//! decision is delegated to `stockroom-engine`.
//!
//! # Status mapping
//!
//! | Engine outcome | HTTP |
//! |---|---|
//! | any [`stockroom_engine::ConflictError`] | 409 |
//! | not found / unparseable record id | 404 |
//! | empty update, invalid field value | 400 |
//! | missing or bad credentials | 401 |

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod token;

pub use auth::{AllowAllAuth, AuthProvider, Credentials, Identity, TokenAuth};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::{auth_provider, StockroomServer};
pub use token::{TokenError, TokenSigner};
