use crate::Result;

/// Something that can show the login page to the user
pub trait Browser {
    /// Open `url` for the user to interact with
    fn open(&self, url: &str) -> Result<()>;
}

/// The user's default web browser
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

#[cfg(feature = "browser")]
impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        open_browser(url)
    }
}

/// Open a URL in the user's default web browser
///
/// # Errors
///
/// Returns `BrowserLaunch` if no browser could be started
///
/// # Example
///
/// ```no_run
/// use psn_account_id::{blocking::OAuthClient, OAuthConfig, open_browser};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OAuthClient::new(OAuthConfig::default())?;
/// open_browser(&client.authorization_url()?)?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "browser")]
pub fn open_browser(url: &str) -> Result<()> {
    webbrowser::open(url).map_err(|e| crate::PsnAuthError::BrowserLaunch(e.to_string()))
}
