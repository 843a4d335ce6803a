//! The secrets provider capability and its SSM implementation.

use async_trait::async_trait;
use aws_sdk_ssm::Client;
use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::SecretsError;

/// Resolves named secrets to their string payloads.
///
/// Injected into the request handler and constructed once per process; the
/// handler still resolves the database secret fresh on every invocation.
#[async_trait]
pub trait SecretsProvider: Send + Sync {
    /// Fetch the decrypted payload of the named secret.
    async fn fetch(&self, name: &str) -> Result<String, SecretsError>;
}

/// AWS SSM Parameter Store implementation of [`SecretsProvider`].
pub struct SsmSecretsProvider {
    client: Client,
}

impl SsmSecretsProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a provider from the ambient AWS environment (region,
    /// credentials chain).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl SecretsProvider for SsmSecretsProvider {
    async fn fetch(&self, name: &str) -> Result<String, SecretsError> {
        tracing::debug!(name, "fetching database secret");

        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| SecretsError::Provider(DisplayErrorContext(&err).to_string()))?;

        let value = output
            .parameter()
            .and_then(|parameter| parameter.value())
            .ok_or_else(|| SecretsError::Empty {
                name: name.to_string(),
            })?;

        Ok(value.to_string())
    }
}
