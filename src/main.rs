// feedcard - a social post card for the terminal
//
// Renders a post (author, content, publication time) with a local comment
// thread: a validated comment form and a deletable comment list, with the
// fixed strings and timestamp formatting in Brazilian Portuguese.

mod card;
mod cli;
mod config;
mod logging;
mod post;
mod sample;
mod state;
mod theme;
mod timefmt;
mod tui;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use post::Post;
use state::CommentThread;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands (config management) run and exit before any UI setup
    if cli::handle_command(cli.command) {
        return Ok(());
    }

    // Create config template on first run so options are discoverable
    Config::ensure_config_exists();
    let config = Config::from_env();

    // RUST_LOG overrides the configured level
    let default_filter = format!("feedcard={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let log_buffer = LogBuffer::new();
    if cli.no_tui {
        // Plain stderr logging is fine when we own no alternate screen
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        // Logs go to the in-memory buffer; printing would garble the TUI
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
    }

    let post = match &cli.post {
        Some(path) => Post::from_file(path)?,
        None => {
            tracing::debug!("no post file given, using the built-in sample");
            sample::sample_post()
        }
    };

    if cli.no_tui {
        // One-shot render of the freshly loaded card
        print!("{}", card::format_card(&post, &CommentThread::new(), Utc::now()));
        return Ok(());
    }

    tracing::info!("starting feedcard v{}", config::VERSION);
    tui::run_tui(post, log_buffer, config).await
}
