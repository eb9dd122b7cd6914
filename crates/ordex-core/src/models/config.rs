//! Process configuration for the completion API client.

use serde::Serialize;

use crate::error::ConfigError;

/// Environment variable carrying the Azure OpenAI resource endpoint.
pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
/// Environment variable carrying the API key.
pub const ENV_API_KEY: &str = "AZURE_OPENAI_KEY";
/// Environment variable carrying the deployment (model) name.
pub const ENV_DEPLOYMENT: &str = "AZURE_DEPLOYMENT_NAME";
/// Environment variable carrying the API version.
pub const ENV_API_VERSION: &str = "API_VERSION";

/// Connection settings for the hosted completion API.
///
/// Built once at process start and handed to the client; nothing re-reads
/// the environment after startup. The key is excluded from serialization
/// so the config can be logged.
#[derive(Debug, Clone, Serialize)]
pub struct LlmConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,

    /// API key sent in the `api-key` header.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Deployment name addressed by the completions route.
    pub deployment: String,

    /// API version query parameter.
    pub api_version: String,
}

impl LlmConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration through an arbitrary variable lookup.
    /// Tests inject a map here instead of mutating process globals.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnv(key))
        };

        Ok(Self {
            endpoint: require(ENV_ENDPOINT)?,
            api_key: require(ENV_API_KEY)?,
            deployment: require(ENV_DEPLOYMENT)?,
            api_version: require(ENV_API_VERSION)?,
        })
    }

    /// Full chat-completions URL for this deployment.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn sample_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            (ENV_ENDPOINT, "https://unit.openai.azure.com/".to_string()),
            (ENV_API_KEY, "secret".to_string()),
            (ENV_DEPLOYMENT, "gpt-4o".to_string()),
            (ENV_API_VERSION, "2024-02-15-preview".to_string()),
        ])
    }

    #[test]
    fn test_from_lookup_complete() {
        let vars = sample_vars();
        let config = LlmConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.deployment, "gpt-4o");
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn test_from_lookup_missing_variable() {
        let mut vars = sample_vars();
        vars.remove(ENV_API_KEY);

        let err = LlmConfig::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ENV_API_KEY)));
    }

    #[test]
    fn test_empty_variable_counts_as_missing() {
        let mut vars = sample_vars();
        vars.insert(ENV_DEPLOYMENT, String::new());

        let err = LlmConfig::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ENV_DEPLOYMENT)));
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let vars = sample_vars();
        let config = LlmConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(
            config.completions_url(),
            "https://unit.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-15-preview"
        );
    }

    #[test]
    fn test_api_key_not_serialized() {
        let vars = sample_vars();
        let config = LlmConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
