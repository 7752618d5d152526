//! The interactive run: instructions, login, redirect capture, lookup, delivery.
//!
//! Every step either advances to the next one or ends the run with an error;
//! there is no retry. Terminal I/O, the browser and the clipboard are injected
//! so the whole run can be driven from tests.

use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::blocking::OAuthClient;
use crate::browser::Browser;
use crate::clipboard::Clipboard;
use crate::{AccountId, PsnAuthError, Result, parse_redirect_url};

const INSTRUCTIONS: &str = "\
== PSN ID Scraper for Remote Play ==
In order to get your Account code for Remote Play, You'll need to Login via a special Remote Play login webpage.
After logging in, you will see a webpage that displays \"redirect\" in the top-left.
When you see this page, Copy the entire URL from your browser, paste it below and then press *Enter*
";

/// Options for a single run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Print the login URL instead of launching a browser
    pub headless: bool,
    /// Wait for Enter before returning
    pub wait_before_exit: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            headless: false,
            wait_before_exit: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    ShowInstructions,
    AwaitRedirectInput,
    ParseCode,
    ExchangeToken,
    LookupAccount,
    EncodeId,
    Deliver,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::ShowInstructions => "show-instructions",
            Step::AwaitRedirectInput => "await-redirect-input",
            Step::ParseCode => "parse-code",
            Step::ExchangeToken => "exchange-token",
            Step::LookupAccount => "lookup-account",
            Step::EncodeId => "encode-id",
            Step::Deliver => "deliver",
        };
        f.write_str(name)
    }
}

/// One run of the account id flow
///
/// `browser` may be `None` when no browser support is available; the login URL
/// is then printed as in headless mode.
pub struct Flow<'a, R, W> {
    client: &'a OAuthClient,
    input: R,
    output: W,
    browser: Option<&'a dyn Browser>,
    clipboard: &'a mut dyn Clipboard,
    options: RunOptions,
}

impl<'a, R: BufRead, W: Write> Flow<'a, R, W> {
    pub fn new(
        client: &'a OAuthClient,
        input: R,
        output: W,
        browser: Option<&'a dyn Browser>,
        clipboard: &'a mut dyn Clipboard,
        options: RunOptions,
    ) -> Self {
        Self {
            client,
            input,
            output,
            browser,
            clipboard,
            options,
        }
    }

    /// Run every step in order and return the account id
    ///
    /// # Errors
    ///
    /// The first fatal error ends the run. Browser and clipboard failures are
    /// reported on the output and do not end it.
    pub fn run(mut self) -> Result<AccountId> {
        enter(Step::ShowInstructions);
        writeln!(self.output, "{}", INSTRUCTIONS)?;
        self.show_login_page()?;

        enter(Step::AwaitRedirectInput);
        write!(self.output, "Awaiting Input >")?;
        self.output.flush()?;
        let line = self
            .read_line()?
            .ok_or_else(|| PsnAuthError::MalformedInput("no input received".to_string()))?;

        enter(Step::ParseCode);
        let code = parse_redirect_url(&line)?;

        enter(Step::ExchangeToken);
        let keys = self.client.exchange_code(&code)?;

        enter(Step::LookupAccount);
        let info = self.client.client_info(&keys.access_token)?;

        enter(Step::EncodeId);
        let account_id = AccountId::from_user_id(&info.user_id)?;

        enter(Step::Deliver);
        self.deliver(&account_id)?;

        if self.options.wait_before_exit {
            writeln!(self.output, "Press Enter to quit")?;
            self.output.flush()?;
            self.read_line()?;
        }

        Ok(account_id)
    }

    fn show_login_page(&mut self) -> Result<()> {
        let url = self.client.authorization_url()?;

        let browser = match self.browser {
            Some(browser) if !self.options.headless => browser,
            _ => {
                writeln!(
                    self.output,
                    "[Headless] You'll need to open this page in a web browser that supports Javascript/ReCaptcha"
                )?;
                writeln!(self.output, "[Headless] {}", url)?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "Press Enter to open the PSN Remote Play login webpage in your browser"
        )?;
        self.output.flush()?;
        self.read_line()?;

        if let Err(e) = browser.open(&url) {
            warn!(error = %e, "could not open browser");
            writeln!(self.output, "{}", e)?;
            writeln!(self.output, "Please open this page manually:\n{}", url)?;
        }
        Ok(())
    }

    fn deliver(&mut self, account_id: &AccountId) -> Result<()> {
        let encoded = account_id.encode();

        match self.clipboard.write_text(&encoded) {
            Ok(()) => {
                writeln!(self.output, "Your AccountID is: {} (Copied to Clipboard)", encoded)?;
            }
            Err(e) => {
                warn!(error = %e, "could not copy account id");
                writeln!(self.output, "Your AccountID is: {}", encoded)?;
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    /// `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn enter(step: Step) {
    debug!(%step, "entering step");
}
