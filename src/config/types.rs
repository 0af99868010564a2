//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_METADATA_TIMEOUT_MS, DEFAULT_METADATA_USER_AGENT,
    DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE, TCP_CONNECT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use site_audit::Config;
///
/// let config = Config {
///     port: 9000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Address the API server binds to
    pub host: String,

    /// Port the API server listens on
    pub port: u16,

    /// User-Agent for homepage, robots.txt and sitemap.xml fetches
    pub user_agent: String,

    /// User-Agent for metadata fetches that do not name their own
    pub metadata_user_agent: String,

    /// Metadata fetch timeout used when a request does not name one
    pub metadata_timeout_ms: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Largest response body accepted from a fetched page
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            metadata_user_agent: DEFAULT_METADATA_USER_AGENT.to_string(),
            metadata_timeout_ms: DEFAULT_METADATA_TIMEOUT_MS,
            connect_timeout_secs: TCP_CONNECT_TIMEOUT_SECS,
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "site_audit",
    about = "Audits page metadata, AdSense readiness and sitemap crawlability."
)]
pub struct Opt {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// User-Agent for homepage, robots.txt and sitemap.xml fetches
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Largest response body to accept, in bytes
    #[arg(long, default_value_t = MAX_RESPONSE_BODY_SIZE, global = true)]
    pub max_body_bytes: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations available from the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a page and print its metadata as JSON
    Metadata {
        /// Absolute URL of the page
        url: String,

        /// Fetch timeout in milliseconds (1000-10000)
        #[arg(long, default_value_t = DEFAULT_METADATA_TIMEOUT_MS)]
        timeout_ms: u64,

        /// User-Agent for the metadata fetch
        #[arg(long)]
        metadata_user_agent: Option<String>,

        /// Also print the SEO score of the metadata
        #[arg(long)]
        score: bool,
    },
    /// Run the AdSense readiness checklist against a homepage
    Adsense {
        /// Absolute URL of the homepage
        url: String,
    },
    /// Check every sitemap.xml URL against the robots.txt Disallow rules
    Sitemap {
        /// Absolute URL of the site root
        site_url: String,
    },
    /// Serve the audit operations as a JSON API
    Serve {
        /// Address to bind to
        #[arg(long, default_value = DEFAULT_API_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_API_PORT)]
        port: u16,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        let mut config = Config {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            user_agent: opt.user_agent.clone(),
            max_body_bytes: opt.max_body_bytes,
            ..Default::default()
        };
        match &opt.command {
            Command::Serve { host, port } => {
                config.host = host.clone();
                config.port = *port;
            }
            Command::Metadata {
                timeout_ms,
                metadata_user_agent,
                ..
            } => {
                config.metadata_timeout_ms = *timeout_ms;
                if let Some(ua) = metadata_user_agent {
                    config.metadata_user_agent = ua.clone();
                }
            }
            Command::Adsense { .. } | Command::Sitemap { .. } => {}
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.metadata_timeout_ms, 5000);
        assert_eq!(config.port, DEFAULT_API_PORT);
        assert_eq!(config.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_opt_parses_metadata_command() {
        let opt = Opt::try_parse_from([
            "site_audit",
            "metadata",
            "https://example.com",
            "--timeout-ms",
            "2500",
            "--score",
        ])
        .expect("metadata command should parse");

        match &opt.command {
            Command::Metadata {
                url,
                timeout_ms,
                score,
                metadata_user_agent,
            } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(*timeout_ms, 2500);
                assert!(*score);
                assert!(metadata_user_agent.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let config = Config::from(&opt);
        assert_eq!(config.metadata_timeout_ms, 2500);
    }

    #[test]
    fn test_opt_serve_overrides_bind_address() {
        let opt = Opt::try_parse_from([
            "site_audit",
            "--log-level",
            "debug",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9100",
        ])
        .expect("serve command should parse");

        let config = Config::from(&opt);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_opt_requires_subcommand() {
        assert!(Opt::try_parse_from(["site_audit"]).is_err());
    }

    #[test]
    fn test_opt_rejects_unknown_log_format() {
        let result = Opt::try_parse_from([
            "site_audit",
            "--log-format",
            "xml",
            "adsense",
            "https://example.com",
        ]);
        assert!(result.is_err());
    }
}
