use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use tweetbox::api::ApiClient;
use tweetbox::app::App;
use tweetbox::config::ConfigManager;
use tweetbox::logging::{self, LogConfig};
use tweetbox::server_config::ServerConfigManager;
use tweetbox::session::{resolve_session, SessionOverrides, SessionStore};
use tweetbox::{terminal, ui};

/// TweetBox - compose tweets and read the feed from your terminal
#[derive(Parser)]
#[command(name = "tweetbox")]
#[command(about = "A terminal client for posting to and reading a tweet feed")]
#[command(version)]
struct Cli {
    /// Server URL to connect to
    #[arg(long, short, env = "TWEETBOX_SERVER_URL")]
    server: Option<String>,

    /// Post as this user instead of the saved session
    #[arg(long, env = "TWEETBOX_USER")]
    user: Option<String>,

    /// Avatar URL to use with --user
    #[arg(long, env = "TWEETBOX_AVATAR", requires = "user")]
    avatar: Option<String>,

    /// Ignore any session (read-only mode)
    #[arg(long, conflicts_with = "user")]
    anonymous: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable the log file entirely
    #[arg(long, conflicts_with = "verbose")]
    no_log: bool,
}

// Load environment variables from .env file so TWEETBOX_* can be set without flags
fn load_env() {
    let _ = dotenv::dotenv();
}

fn log_config_for(cli: &Cli) -> LogConfig {
    if cli.no_log {
        LogConfig::disabled()
    } else if cli.quiet {
        LogConfig::minimal()
    } else if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    load_env();
    let cli = Cli::parse();

    let log_config = log_config_for(&cli);
    logging::init_logging(&log_config)?;

    let config_manager = ConfigManager::new()?;
    let server_url = ServerConfigManager::new(config_manager.clone()).determine_server_url(cli.server)?;

    let overrides = SessionOverrides {
        user: cli.user,
        avatar: cli.avatar,
        anonymous: cli.anonymous,
    };
    let session = resolve_session(&overrides, &SessionStore::new(config_manager.session_file()))?;
    match &session {
        Some(s) => log::info!("Composing as {}", s.username()),
        None => log::info!("No session found, posting disabled"),
    }

    let api = ApiClient::with_timeout(&server_url, Duration::from_secs(cli.timeout_secs))
        .context("Failed to build HTTP client")?;
    log::info!("Using server {}", api.base_url());

    let mut app = App::new(Arc::new(api), session, server_url);
    app.log_config = log_config;

    let mut tui = terminal::init()?;
    let result = run(&mut tui, &mut app);
    terminal::restore()?;

    result
}

/// Main event loop
fn run(tui: &mut terminal::Tui, app: &mut App) -> Result<()> {
    // Initial feed load, same refresh call the form uses after posting
    app.refresh_feed();

    while app.running {
        app.tick();
        tui.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }
    }

    Ok(())
}
