/// Database connection parameters resolved from the secrets provider.
///
/// Owned by a single invocation: resolved fresh from the secret payload on
/// every request and discarded after the connection is opened. Never cached
/// across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    /// Database name.
    pub name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}
