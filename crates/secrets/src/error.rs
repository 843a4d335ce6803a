/// Failures while resolving or parsing the database secret.
///
/// All of these surface to the caller as invocation failures; the variants
/// keep provider outages distinguishable from a misconfigured payload.
#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    /// The secrets provider request itself failed.
    #[error("secrets provider request failed: {0}")]
    Provider(String),

    /// The provider returned no value for the named secret.
    #[error("secret '{name}' has no value")]
    Empty { name: String },

    /// The secret payload is not the expected JSON shape.
    #[error("malformed database secret: {0}")]
    Malformed(#[from] serde_json::Error),
}
