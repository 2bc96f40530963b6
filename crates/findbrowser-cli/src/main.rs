use anyhow::Result;
use clap::Parser;
use findbrowser_core::{Browser, BrowserPaths};

/// Marker printed for a browser that was not found anywhere.
const NOT_FOUND: &str = "not found";

#[derive(Parser)]
#[command(name = "findbrowser")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Locate installed browser executables on Windows",
    long_about = "Findbrowser looks up where Chrome and Microsoft Edge are installed by \
                  checking the App Paths registry branch, the desktop shortcuts, and the \
                  Start Menu, and prints the discovered executable paths."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the result mapping as JSON instead of one path per line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let paths = locate()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        print_plain(&paths);
    }

    Ok(())
}

#[cfg(windows)]
fn locate() -> Result<BrowserPaths> {
    use findbrowser_core::WindowsSystem;

    tracing::info!("Looking up installed browsers");
    Ok(findbrowser_core::locate_browsers(&WindowsSystem::new())?)
}

#[cfg(not(windows))]
fn locate() -> Result<BrowserPaths> {
    anyhow::bail!("findbrowser only supports Windows")
}

/// Edge first, then Chrome, one line each.
fn print_plain(paths: &BrowserPaths) {
    for browser in [Browser::Edge, Browser::Chrome] {
        match paths.get(browser) {
            Some(path) => println!("{}", path.display()),
            None => println!("{NOT_FOUND}"),
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("findbrowser=debug,findbrowser_core=debug")
    } else {
        EnvFilter::new("findbrowser=info,findbrowser_core=info")
    };

    // Diagnostics go to stderr; stdout carries only the result lines.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
