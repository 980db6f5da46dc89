//! Secret providers backed by the process environment.

use tracing::debug;

use crate::{NodeError, SecretProvider};

/// Reads secrets from environment variables named `<NAME>_API_KEY`.
///
/// `GIPHY` resolves to `GIPHY_API_KEY`. An empty variable counts as missing.
#[derive(Debug, Clone, Default)]
pub struct EnvSecrets;

impl EnvSecrets {
    /// Environment variable consulted for the secret `name`.
    pub fn var_name(name: &str) -> String {
        format!("{}_API_KEY", name.to_ascii_uppercase())
    }
}

impl SecretProvider for EnvSecrets {
    fn get_secret(&self, name: &str) -> Result<String, NodeError> {
        let var = Self::var_name(name);
        debug!(secret = name, var = %var, "resolving secret from environment");

        match std::env::var(&var) {
            Ok(value) if !value.is_empty() => Ok(value),
            Ok(_) => Err(NodeError::Secret {
                name: name.to_owned(),
                message: format!("environment variable {var} is empty"),
            }),
            Err(e) => Err(NodeError::Secret {
                name: name.to_owned(),
                message: format!("{var}: {e}"),
            }),
        }
    }
}
