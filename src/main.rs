//! Mattersend - send messages to Mattermost incoming webhooks.
//!
//! # Usage
//!
//! ```bash
//! echo "deploy finished" | mattersend -c town-square
//! mattersend -c ops -f build.log -I
//! mattersend -c reports -t -f report.csv
//! mattersend -c town-square -m "hello" --dry-run
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use mattersend::compose::{ComposeRequest, Input, read_stdin};
use mattersend::config::{DEFAULT_SECTION, MessageOptions};
use mattersend::delivery::WebhookClient;
use mattersend::highlight::SyntaxMode;
use mattersend::tabular::TabularDialect;

/// Sends messages to Mattermost's incoming webhooks via CLI
#[derive(Parser, Debug)]
#[command(name = "mattersend", version, about, long_about = None)]
struct Cli {
    /// Use a different configuration file
    #[arg(short = 'C', long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Configuration file section
    #[arg(short, long, default_value = DEFAULT_SECTION)]
    section: String,

    /// Send to this channel or @username
    #[arg(short, long)]
    channel: Option<String>,

    /// Mattermost webhook URL
    #[arg(short = 'U', long)]
    url: Option<String>,

    /// Username
    #[arg(short, long)]
    username: Option<String>,

    /// Icon URL or :emoji:
    #[arg(short, long)]
    icon: Option<String>,

    /// Send :emoji: icons as icon_emoji instead of image URLs
    #[arg(long)]
    native_emoji: bool,

    /// Parse input as CSV and format it as a table
    #[arg(
        short,
        long,
        value_name = "DIALECT",
        value_enum,
        num_args = 0..=1,
        default_missing_value = "sniff",
        conflicts_with = "syntax"
    )]
    tabular: Option<TabularDialect>,

    /// Code block syntax: auto, none, plain or a language name
    #[arg(short = 'y', long, default_value = "auto")]
    syntax: SyntaxMode,

    /// Include file information in message
    #[arg(short = 'I', long)]
    info: bool,

    /// Don't send, just print the payload
    #[arg(short = 'n', long, visible_alias = "just-print")]
    dry_run: bool,

    /// Read content from FILE. If - reads from standard input
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Message text, sent before any content from FILE or standard input
    #[arg(short, long)]
    message: Option<String>,

    /// Seconds to wait for the webhook to answer
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,

    /// Log composition and delivery details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> MessageOptions {
        MessageOptions {
            url: self.url.clone(),
            channel: self.channel.clone(),
            username: self.username.clone(),
            icon: self.icon.clone(),
        }
    }

    fn input(&self) -> Result<Input> {
        let from_stdin = match &self.file {
            Some(path) => path.as_os_str() == "-",
            None => self.message.is_none(),
        };
        if from_stdin {
            return Ok(Input::Text(read_stdin().context("Failed to read standard input")?));
        }
        Ok(self.file.clone().map_or(Input::None, Input::File))
    }
}

fn log_filter(verbose: bool, env: &str) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(env)
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose, &env))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let request = ComposeRequest {
        options: cli.options(),
        config_file: cli.config.clone(),
        section: cli.section.clone(),
        message: cli.message.clone(),
        input: cli.input()?,
        tabular: cli.tabular,
        syntax: cli.syntax.clone(),
        fileinfo: cli.info,
        native_emoji: cli.native_emoji,
    };

    let prepared = request.compose()?.prepare()?;

    if cli.dry_run {
        println!("{}", prepared.dry_run());
        return Ok(());
    }

    let client = WebhookClient::with_timeout(Duration::from_secs(cli.timeout))?;
    prepared.deliver(&client)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{err:#}");
            eprintln!("mattersend: {}", message.replace('\n', " "));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, "").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(true, "").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_bare_rust_log_level_overrides_default() {
        assert_eq!(log_filter(false, "debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(true, "error").max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_cli_flags_parse() {
        let cli = Cli::try_parse_from(["mattersend", "-c", "ops", "-t", "-n", "-m", "hi"]).unwrap();
        assert_eq!(cli.tabular, Some(TabularDialect::Sniff));
        assert!(cli.dry_run);
        assert_eq!(cli.syntax, SyntaxMode::Auto);
    }
}
