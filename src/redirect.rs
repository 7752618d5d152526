use url::Url;

use crate::{PsnAuthError, Result};

/// Extract the authorization code from a pasted redirect URL
///
/// Surrounding whitespace (including the trailing newline from the terminal)
/// is ignored. The first `code` query parameter wins.
///
/// # Errors
///
/// - `MalformedInput` if the text is not a valid absolute URL
/// - `MissingAuthorizationCode` if `code` is absent or empty
///
/// # Example
///
/// ```
/// use psn_account_id::parse_redirect_url;
///
/// let code = parse_redirect_url(
///     "https://remoteplay.dl.playstation.net/remoteplay/redirect?code=abc123&state=foo\n",
/// )
/// .unwrap();
/// assert_eq!(code, "abc123");
/// ```
pub fn parse_redirect_url(input: &str) -> Result<String> {
    let url = Url::parse(input.trim()).map_err(|e| PsnAuthError::MalformedInput(e.to_string()))?;

    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
        .ok_or(PsnAuthError::MissingAuthorizationCode)
}
