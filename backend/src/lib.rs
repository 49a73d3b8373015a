//! # Tarot Blog Backend
//!
//! REST backend for a tarot and horoscope blog. It stores horoscope posts,
//! pick-a-card reading sessions and paid reading requests in a document
//! store and lists horoscopes by sign and period.
//!
//! ## Architecture
//!
//! - [`models`]: request schemas and their closed literal sets
//! - [`db`]: persistence adapter, repository trait and backends
//! - [`config`]: process configuration from the environment
//! - [`http`]: Axum router, handlers and error mapping
//!
//! ## Backends
//!
//! The `local-repo` feature provides an in-memory store used by default and
//! in tests. The `mongo-repo` feature adds a MongoDB repository selected
//! through `DATABASE_URL` or `repository.toml`.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
