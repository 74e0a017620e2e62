//! Visibility Engine
//!
//! Fact loading and orchestration around the pure decision policies in
//! `visibility-policy`. Every content-read path (single fetch, feed
//! hydration, share creation, external share links, repost/like listings)
//! consumes the engine instead of issuing its own visibility queries.
//!
//! The split is deliberate: the engine owns a minimal, fixed set of
//! fact-loading queries and hands already-loaded facts to the policy, which
//! keeps the policy testable without a database and keeps the query set
//! auditable in one place.
//!
//! # Modules
//!
//! - `config`: environment-driven configuration
//! - `db`: the fixed fact-loading queries (sqlx/Postgres)
//! - `error`: engine error types; a deny decision is never an error
//! - `models`: row types the queries produce
//! - `store`: the `FactStore` trait and its Postgres implementation
//! - `services`: fact loader, decision services, listing filtering

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{EngineError, EngineResult};
pub use services::{load_visibility_facts, VisibilityService, VisibleListing};
pub use store::{FactStore, PgFactStore};
