use std::sync::Arc;

use life_db::StoreConnector;
use life_secrets::SecretsProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The secrets provider and store connector are injected capabilities:
/// constructed once per process, shared immutably, holding no
/// per-invocation state. Cheaply cloneable (all fields are behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Resolves the database secret for each invocation.
    pub secrets: Arc<dyn SecretsProvider>,
    /// Opens one dedicated store connection per invocation.
    pub store: Arc<dyn StoreConnector>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
