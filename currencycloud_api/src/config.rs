//! Vendor environments and API credentials.

use std::fmt;

/// Currencycloud environment a [`Client`](crate::Client) talks to.
///
/// The demo environment is a full sandbox with canned market data; new
/// integrations should run against it until go-live.
#[derive(Clone, Copy, Default)]
pub enum Environment {
    /// Sandbox environment at `https://devapi.currencycloud.com`.
    #[default]
    Demo,
    /// Live environment at `https://api.currencycloud.com`.
    Production,
}

impl Environment {
    /// Base URL for this environment, without a trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Demo => "https://devapi.currencycloud.com",
            Environment::Production => "https://api.currencycloud.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Demo => "demo",
                Environment::Production => "production",
            }
        )
    }
}

/// Login credentials for the authentication endpoint.
///
/// The API key here is the 64-character key generated in the Currencycloud
/// portal, not the account password.
#[derive(Clone)]
pub struct Credentials {
    pub login_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(login_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            api_key: api_key.into(),
        }
    }
}

// Keeps the API key out of debug output and log events.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login_id", &self.login_id)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_base_urls() {
        assert_eq!(Environment::Demo.base_url(), "https://devapi.currencycloud.com");
        assert_eq!(
            Environment::Production.base_url(),
            "https://api.currencycloud.com"
        );
    }

    #[test]
    fn credentials_debug_redacts_api_key() {
        let creds = Credentials::new("trader@example.com", "deadbeef");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("trader@example.com"));
        assert!(!rendered.contains("deadbeef"));
    }
}
