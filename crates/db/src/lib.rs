//! Relational store access for the workout completion service.
//!
//! The service holds no connection pool: each invocation opens one
//! dedicated Postgres connection and releases it on every exit path.
//! [`store`] defines the connection traits the request handler depends on;
//! [`pg`] provides the Postgres implementation on top of the repositories.

pub mod models;
pub mod pg;
pub mod repositories;
pub mod store;

pub use pg::PgStore;
pub use store::{StoreConnection, StoreConnector, StoreError};
