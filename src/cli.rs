use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Helldivers 2 war status in the terminal
///
/// Reads the community Helldivers 2 API and the Diveharder API and prints
/// campaigns, dispatches, major orders, planets, statistics and patch notes.
///
/// Endpoints and the client identity sent to the APIs can be changed with
/// the `config` command or the DIVEHARDER_* environment variables.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also write logs to the terminal.
    /// Logs are always written to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List active campaigns with liberation progress
    Campaigns,

    /// Show in-game dispatches
    News {
        /// Only show the most recent dispatch
        #[arg(short, long)]
        latest: bool,
    },

    /// Show the current major order
    Mo,

    /// List planets, or show details for one planet
    Planets {
        /// Planet index to show in detail
        #[arg(long = "id", value_name = "INDEX")]
        id: Option<i32>,
    },

    /// Show galaxy statistics, or statistics for one planet
    Stats {
        /// Planet index to show statistics for
        #[arg(long = "planet", value_name = "INDEX")]
        planet: Option<i32>,
    },

    /// Show patch notes
    Updates {
        /// Only show the most recent update
        #[arg(short, long)]
        latest: bool,
    },

    /// Show the war summary
    War,

    /// List Steam news
    Steam,

    /// Show or change configuration
    Config(ConfigArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Default)]
pub struct ConfigArgs {
    /// Set the community API base URL
    #[arg(long = "community-url", value_name = "URL", help_heading = "Configuration")]
    pub community_url: Option<String>,

    /// Set the Diveharder API base URL
    #[arg(long = "diveharder-url", value_name = "URL", help_heading = "Configuration")]
    pub diveharder_url: Option<String>,

    /// Set the client name sent as User-Agent and X-Super-Client
    #[arg(long = "user-agent", help_heading = "Configuration")]
    pub user_agent: Option<String>,

    /// Set the contact sent as X-Super-Contact
    #[arg(long = "contact", help_heading = "Configuration")]
    pub user_contact: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", conflicts_with = "log_file_path", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Set the HTTP timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", help_heading = "Configuration")]
    pub http_timeout_seconds: Option<u64>,
}

impl ConfigArgs {
    /// Whether any value is being changed (otherwise the config is just listed).
    pub fn has_changes(&self) -> bool {
        self.community_url.is_some()
            || self.diveharder_url.is_some()
            || self.user_agent.is_some()
            || self.user_contact.is_some()
            || self.log_file_path.is_some()
            || self.clear_log_file_path
            || self.http_timeout_seconds.is_some()
    }
}
