use clap::Parser;
use psn_account_id::{Browser, Clipboard, Flow, OAuthConfig, RunOptions, blocking::OAuthClient};
use std::io;
use std::process::ExitCode;
use tracing::{Level, debug};

/// Get your PSN account id for Remote Play
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the login URL instead of opening a browser
    #[arg(long)]
    headless: bool,

    /// Exit right away instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,

    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> psn_account_id::Result<()> {
    let client = OAuthClient::new(OAuthConfig::default())?;
    let options = RunOptions {
        headless: args.headless,
        wait_before_exit: !args.no_wait,
    };

    #[cfg(feature = "browser")]
    let system_browser = psn_account_id::SystemBrowser;
    #[cfg(feature = "browser")]
    let browser: Option<&dyn Browser> = Some(&system_browser);
    #[cfg(not(feature = "browser"))]
    let browser: Option<&dyn Browser> = None;

    // Outlives the flow so the clipboard contents stay available until exit.
    #[cfg(feature = "clipboard")]
    let mut system_clipboard = psn_account_id::SystemClipboard::new();
    #[cfg(not(feature = "clipboard"))]
    let mut system_clipboard = psn_account_id::NoClipboard;
    let clipboard: &mut dyn Clipboard = &mut system_clipboard;

    let account_id = Flow::new(
        &client,
        io::stdin().lock(),
        io::stdout(),
        browser,
        clipboard,
        options,
    )
    .run()?;

    debug!(account_id = account_id.value(), "done");
    Ok(())
}
