//! The database secret payload.

use life_core::config::DbConfig;
use serde::Deserialize;

use crate::error::SecretsError;

/// Shape of the database secret stored in SSM.
///
/// All five fields are required; a payload missing any of them is rejected
/// before a connection is attempted.
#[derive(Debug, Deserialize)]
pub struct DbSecret {
    #[serde(rename = "DB_HOST")]
    host: String,
    #[serde(rename = "DB_NAME")]
    name: String,
    #[serde(rename = "DB_USER")]
    user: String,
    #[serde(rename = "DB_PASSWORD")]
    password: String,
    #[serde(rename = "DB_PORT", deserialize_with = "port_from_number_or_text")]
    port: u16,
}

impl DbSecret {
    /// Parse a raw secret payload into connection parameters.
    pub fn parse(raw: &str) -> Result<DbConfig, SecretsError> {
        let secret: DbSecret = serde_json::from_str(raw)?;
        Ok(DbConfig {
            host: secret.host,
            name: secret.name,
            user: secret.user,
            password: secret.password,
            port: secret.port,
        })
    }
}

/// `DB_PORT` arrives as a JSON number or a numeric string depending on how
/// the parameter was written; accept both.
fn port_from_number_or_text<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("DB_PORT is not a valid port: {text:?}"))),
    }
}
