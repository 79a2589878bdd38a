//! Configuration for the OpenAI completion provider.

use secrecy::SecretString;

/// Base URL for the OpenAI chat completions API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for constructing an [`super::OpenAiProvider`].
pub struct OpenAiConfig {
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-3.5-turbo").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

/// OpenAI default configuration: official base URL, given key and model.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiConfig {
    OpenAiConfig {
        api_key,
        model: model.to_string(),
        base_url: OPENAI_BASE_URL.to_string(),
    }
}
