//! # psn-account-id
//!
//! Obtain the PSN account id that Remote Play clients ask for.
//!
//! The user logs in through the PlayStation Network OAuth page and pastes the
//! redirect URL back. The authorization code from that URL is exchanged for an
//! access token, the token is introspected for the numeric `user_id`, and the id
//! is packed as 8 little-endian bytes and base64-encoded.
//!
//! ## Features
//!
//! - **Blocking API**: no async runtime required
//! - **Configurable**: client credentials, endpoints and timeout via [`OAuthConfig`]
//! - **Browser Integration** (`browser`, default): open the login page automatically
//! - **Clipboard** (`clipboard`, default): copy the encoded id for pasting
//!
//! ## Quick Start
//!
//! ```no_run
//! use psn_account_id::{blocking::OAuthClient, parse_redirect_url, OAuthConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OAuthClient::new(OAuthConfig::default())?;
//!     println!("Visit: {}", client.authorization_url()?);
//!
//!     // Read the redirect URL from the user...
//!     let code = parse_redirect_url("https://remoteplay.dl.playstation.net/remoteplay/redirect?code=abc")?;
//!
//!     let account_id = client.fetch_account_id(&code)?;
//!     println!("Your AccountID is: {}", account_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Encoding only
//!
//! ```
//! use psn_account_id::AccountId;
//!
//! let id = AccountId::from_user_id("0").unwrap();
//! assert_eq!(id.encode(), "AAAAAAAAAAA=");
//! ```

mod account_id;
mod error;
mod redirect;
mod types;

pub mod blocking;
pub mod browser;
pub mod clipboard;
pub mod flow;

#[cfg(test)]
mod test_server;

// Public API exports
pub use account_id::AccountId;
pub use error::{PsnAuthError, Result};
pub use flow::{Flow, RunOptions};
pub use redirect::parse_redirect_url;
pub use types::{AccessKeys, ClientInfo, OAuthConfig, OAuthConfigBuilder};

pub use browser::Browser;
pub use clipboard::{Clipboard, NoClipboard};

#[cfg(feature = "browser")]
pub use browser::{SystemBrowser, open_browser};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
