//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that runs during
//! `tastemix auth`.
//!
//! - [`callback`] receives the authorization code from Spotify and exchanges it,
//!   together with the PKCE verifier held in shared state, for a token.
//! - [`health`] reports status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use tastemix::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
