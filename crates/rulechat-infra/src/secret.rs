//! Environment variable secret lookup.
//!
//! The completion API credential comes from a single environment variable.
//! Absence fails provider construction at startup; there is no degraded
//! mode.

use secrecy::SecretString;

use rulechat_types::error::SecretError;

/// Environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Read the completion API key from the environment.
pub fn openai_api_key() -> Result<SecretString, SecretError> {
    key_from_env(API_KEY_ENV)
}

fn key_from_env(name: &str) -> Result<SecretString, SecretError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        Ok(_) => Err(SecretError::Missing(name.to_string())),
        Err(std::env::VarError::NotPresent) => Err(SecretError::Missing(name.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(SecretError::NotUnicode(name.to_string()))
        }
    }
}
