use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tokens returned by the authorization-code exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessKeys {
    /// Bearer token used for the account lookup
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Account metadata returned by token introspection
///
/// Only `user_id` is needed to derive the Remote Play account id; the rest is
/// decoded so it can show up in debug output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Decimal account number
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sub_account: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
}

/// Configuration for the PSN OAuth client
///
/// The defaults are the credentials and endpoints of the official Remote Play
/// application. Tests point `auth_url` and `token_url` at a local server.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// OAuth client ID of the Remote Play application
    pub client_id: String,
    /// OAuth client secret, sent with HTTP Basic auth
    pub client_secret: String,
    /// Authorization endpoint URL
    pub auth_url: String,
    /// Token endpoint URL; token introspection lives at `{token_url}/{access_token}`
    pub token_url: String,
    /// Redirect URI registered for the client (default: the Remote Play redirect page)
    pub redirect_uri: String,
    /// Requested scope (default: "psn:clientapp")
    pub scope: String,
    /// Timeout applied to each HTTP request
    pub timeout: Duration,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: "ba495a24-818c-472b-b12d-ff231c1b5745".to_string(),
            client_secret: "mvaiZkRsAsI1IBkY".to_string(),
            auth_url: "https://auth.api.sonyentertainmentnetwork.com/2.0/oauth/authorize"
                .to_string(),
            token_url: "https://auth.api.sonyentertainmentnetwork.com/2.0/oauth/token".to_string(),
            redirect_uri: "https://remoteplay.dl.playstation.net/remoteplay/redirect".to_string(),
            scope: "psn:clientapp".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl OAuthConfig {
    /// Create a new config builder
    pub fn builder() -> OAuthConfigBuilder {
        OAuthConfigBuilder::default()
    }
}

/// Builder for OAuthConfig
#[derive(Debug, Clone, Default)]
pub struct OAuthConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    auth_url: Option<String>,
    token_url: Option<String>,
    redirect_uri: Option<String>,
    scope: Option<String>,
    timeout: Option<Duration>,
}

impl OAuthConfigBuilder {
    /// Set the OAuth client ID
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the OAuth client secret
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the authorization endpoint URL
    pub fn auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = Some(auth_url.into());
        self
    }

    /// Set the token endpoint URL
    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = Some(token_url.into());
        self
    }

    /// Set the redirect URI
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Set the requested scope
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the OAuthConfig
    pub fn build(self) -> OAuthConfig {
        let defaults = OAuthConfig::default();
        OAuthConfig {
            client_id: self.client_id.unwrap_or(defaults.client_id),
            client_secret: self.client_secret.unwrap_or(defaults.client_secret),
            auth_url: self.auth_url.unwrap_or(defaults.auth_url),
            token_url: self.token_url.unwrap_or(defaults.token_url),
            redirect_uri: self.redirect_uri.unwrap_or(defaults.redirect_uri),
            scope: self.scope.unwrap_or(defaults.scope),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let config = OAuthConfig::builder()
            .token_url("http://127.0.0.1:9/token")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.token_url, "http://127.0.0.1:9/token");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.client_id, OAuthConfig::default().client_id);
        assert_eq!(
            config.redirect_uri,
            "https://remoteplay.dl.playstation.net/remoteplay/redirect"
        );
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let keys: AccessKeys = serde_json::from_str(
            r#"{"access_token":"tok1","token_type":"bearer","expires_in":3599,"id_token":"x"}"#,
        )
        .unwrap();
        assert_eq!(keys.access_token, "tok1");
        assert_eq!(keys.expires_in, Some(3599));
        assert!(keys.refresh_token.is_none());

        let info: ClientInfo = serde_json::from_str(
            r#"{"user_id":"1000123456789","online_id":"someone","is_sub_account":false,"dcim_id":"z"}"#,
        )
        .unwrap();
        assert_eq!(info.user_id, "1000123456789");
        assert_eq!(info.online_id.as_deref(), Some("someone"));
        assert_eq!(info.is_sub_account, Some(false));
    }

    #[test]
    fn test_missing_user_id_is_an_error() {
        assert!(serde_json::from_str::<ClientInfo>(r#"{"online_id":"someone"}"#).is_err());
    }
}
