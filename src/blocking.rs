use tracing::debug;
use url::Url;

use crate::error::http_error;
use crate::{AccessKeys, AccountId, ClientInfo, OAuthConfig, PsnAuthError, Result};

/// Blocking PSN OAuth client
///
/// Performs the two calls needed to turn an authorization code into an account
/// id: the authorization-code exchange and token introspection. Both are
/// authenticated with HTTP Basic auth using the configured client credentials.
///
/// # Example
///
/// ```no_run
/// use psn_account_id::{blocking::OAuthClient, OAuthConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = OAuthClient::new(OAuthConfig::default())?;
///     println!("Visit: {}", client.authorization_url()?);
///     // User logs in and pastes the redirect URL...
///
///     let account_id = client.fetch_account_id("code")?;
///     println!("Account id: {}", account_id);
///     Ok(())
/// }
/// ```
pub struct OAuthClient {
    config: OAuthConfig,
}

impl OAuthClient {
    /// Create a new OAuth client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint URLs do not parse
    pub fn new(config: OAuthConfig) -> Result<Self> {
        Url::parse(&config.auth_url)?;
        Url::parse(&config.token_url)?;
        Ok(Self { config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Build the login page URL the user has to visit
    ///
    /// The redirect URI is the same one later sent with the code exchange.
    pub fn authorization_url(&self) -> Result<String> {
        let mut url = Url::parse(&self.config.auth_url)?;
        url.query_pairs_mut()
            .append_pair("service_entity", "urn:service-entity:psn")
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", &self.config.scope)
            .append_pair("request_locale", "en_US")
            .append_pair("ui", "pr")
            .append_pair("service_logo", "ps")
            .append_pair("layout_type", "popup")
            .append_pair("smcid", "remoteplay")
            .append_pair("prompt", "always")
            .append_pair("PlatformPrivacyWs1", "minimal");

        Ok(url.to_string())
    }

    /// Exchange an authorization code for an access token
    ///
    /// # Errors
    ///
    /// - `Network` on transport failure or timeout
    /// - `UnexpectedResponse` on a non-2xx status or an empty access token
    /// - `Decode` if the body is not the expected JSON
    pub fn exchange_code(&self, code: &str) -> Result<AccessKeys> {
        if code.is_empty() {
            return Err(PsnAuthError::MissingAuthorizationCode);
        }

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &self.config.redirect_uri),
        ];

        debug!(url = %self.config.token_url, "exchanging authorization code");
        let response = self
            .http_client()?
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&params)
            .send()?;

        let body = read_success_body(response)?;
        let keys: AccessKeys = serde_json::from_str(&body)?;
        if keys.access_token.is_empty() {
            return Err(PsnAuthError::UnexpectedResponse {
                status: 200,
                body: "token response contained an empty access_token".to_string(),
            });
        }

        debug!(
            token_type = ?keys.token_type,
            expires_in = ?keys.expires_in,
            "received access token"
        );
        Ok(keys)
    }

    /// Look up the account the access token belongs to
    ///
    /// # Errors
    ///
    /// Same as [`OAuthClient::exchange_code`]
    pub fn client_info(&self, access_token: &str) -> Result<ClientInfo> {
        let url = self.introspection_url(access_token)?;

        debug!("looking up account info");
        let response = self
            .http_client()?
            .get(url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .send()?;

        let body = read_success_body(response)?;
        let info: ClientInfo = serde_json::from_str(&body)?;

        debug!(
            online_id = ?info.online_id,
            country_code = ?info.country_code,
            is_sub_account = ?info.is_sub_account,
            "received account info"
        );
        Ok(info)
    }

    /// Exchange the code, look up the account and parse its id
    ///
    /// # Errors
    ///
    /// Any error from the two requests, or `InvalidUserId` if the returned
    /// `user_id` is not a non-negative 64-bit integer
    pub fn fetch_account_id(&self, code: &str) -> Result<AccountId> {
        let keys = self.exchange_code(code)?;
        let info = self.client_info(&keys.access_token)?;
        AccountId::from_user_id(&info.user_id)
    }

    fn introspection_url(&self, access_token: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.token_url)?;
        url.path_segments_mut()
            .map_err(|_| PsnAuthError::UrlParse(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(access_token);
        Ok(url)
    }

    // A fresh client per request; nothing is reused between the two calls.
    fn http_client(&self) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| PsnAuthError::ClientCreation(e.to_string()))
    }
}

fn read_success_body(response: reqwest::blocking::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(http_error(status.as_u16(), &body));
    }
    Ok(response.text()?)
}
