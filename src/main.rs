//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - JSON output of the operation results
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process;

use site_audit::config::{Command, Opt};
use site_audit::initialization::{init_client, init_logger_with};
use site_audit::{
    check_adsense, check_sitemap, fetch_metadata, score_metadata, start_api_server, ApiState,
    AuditContext, Config, MetadataRecord, MetadataRequest, ScoreReport,
};

/// Output of `metadata --score`
#[derive(Serialize)]
struct ScoredMetadata {
    metadata: MetadataRecord,
    score: ScoreReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let ctx = AuditContext::new(client, &config);

    if let Err(e) = run(opt.command, ctx, &config).await {
        eprintln!("site_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, ctx: AuditContext, config: &Config) -> Result<()> {
    match command {
        Command::Metadata {
            url,
            timeout_ms,
            metadata_user_agent,
            score,
        } => {
            let request = MetadataRequest {
                url,
                timeout_ms: Some(timeout_ms),
                user_agent: metadata_user_agent,
            };
            let metadata = fetch_metadata(&ctx, &request).await?;
            if score {
                let score = score_metadata(Some(&metadata));
                print_json(&ScoredMetadata { metadata, score })
            } else {
                print_json(&metadata)
            }
        }
        Command::Adsense { url } => {
            let report = check_adsense(&ctx, &url).await?;
            print_json(&report)
        }
        Command::Sitemap { site_url } => {
            let results = check_sitemap(&ctx, &site_url).await?;
            print_json(&results)
        }
        Command::Serve { .. } => {
            start_api_server(&config.host, config.port, ApiState { ctx }).await
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}
