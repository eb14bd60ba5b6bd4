//! CLI administration tool for shortcode.
//!
//! Works directly against the database through the same link service the
//! HTTP server uses, so every rule (validation, collision retry, expiry)
//! applies identically.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL, expiring in 7 days
//! cargo run --bin admin -- shorten https://example.com/a/b --days 7
//!
//! # Show one link
//! cargo run --bin admin -- stats V1StGXR
//!
//! # List the newest links
//! cargo run --bin admin -- list --limit 20
//!
//! # Delete a link
//! cargo run --bin admin -- delete V1StGXR
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `shortcode::config`.

use shortcode::api::dto::link::short_url;
use shortcode::application::services::{LinkError, LinkService};
use shortcode::config::{self, Config};
use shortcode::domain::entities::Link;
use shortcode::infrastructure::persistence::{self, SqliteLinkRepository};
use shortcode::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type AdminLinkService = LinkService<SqliteLinkRepository, RandomCodeGenerator>;

/// CLI tool for managing shortcode links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten
        url: String,

        /// Expire the link after this many days
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Show one link and its click count
    Stats {
        /// Short code
        code: String,
    },

    /// List the most recent links
    List {
        /// Number of links to show
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let service = connect_service(&config).await?;

    match cli.command {
        Commands::Shorten { url, days } => shorten(&service, &config, &url, days).await?,
        Commands::Stats { code } => stats(&service, &config, &code).await?,
        Commands::List { limit } => list(&service, limit).await?,
        Commands::Delete { code, yes } => delete(&service, &code, yes).await?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&service).await?,
        },
    }

    Ok(())
}

async fn connect_service(config: &Config) -> Result<AdminLinkService> {
    let pool = persistence::connect(&config.database_url, &config.pool_settings()).await?;
    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));

    Ok(
        LinkService::new(repository, RandomCodeGenerator::new(config.code_length))
            .with_max_attempts(config.max_code_attempts),
    )
}

async fn shorten(
    service: &AdminLinkService,
    config: &Config,
    url: &str,
    days: Option<i64>,
) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    match service.shorten(url, days).await {
        Ok(link) => {
            print_link(&link, &config.base_url);
            println!();
            println!("{}", "✅ Short link created".green().bold());
        }
        Err(LinkError::InvalidUrl(reason)) => {
            println!("{} {}", "❌ Invalid URL:".red().bold(), reason);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

async fn stats(service: &AdminLinkService, config: &Config, code: &str) -> Result<()> {
    match service.stats(code).await {
        Ok(link) => print_link(&link, &config.base_url),
        Err(LinkError::NotFound { .. }) => {
            println!("{}", format!("⚠️  No link with code '{code}'").yellow());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Lists recent links.
///
/// # Output Format
///
/// ```text
/// 📋 Recent Links
///
///   Code      Clicks  Created           Status   URL
///   ───────────────────────────────────────────────────────────────
///   V1StGXR   12      2026-10-19 10:30  ACTIVE   https://example.com/a/b
/// ```
async fn list(service: &AdminLinkService, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent Links".bright_blue().bold());
    println!();

    let links = service.recent(limit).await?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {:<8} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    let now = Utc::now();
    for link in &links {
        let status = if link.is_expired_at(now) {
            "EXPIRED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<9} {:<7} {:<17} {:<8} {}",
            link.code.cyan(),
            link.clicks,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status,
            link.original_url
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn delete(service: &AdminLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link '{code}'?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.remove(code).await?;

    println!("{}", "✅ Link deleted".green().bold());
    Ok(())
}

async fn db_check(service: &AdminLinkService) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    let count = service.count().await?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  Links stored: {}", count.to_string().bright_green().bold());

    Ok(())
}

fn print_link(link: &Link, base_url: &str) {
    println!("  Short URL: {}", short_url(base_url, &link.code).bright_yellow().bold());
    println!("  Code:      {}", link.code.cyan());
    println!("  Target:    {}", link.original_url);
    println!("  Clicks:    {}", link.clicks.to_string().bright_white());
    println!(
        "  Created:   {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    match link.expires_at {
        Some(expires_at) if link.is_expired() => println!(
            "  Expires:   {} {}",
            expires_at.format("%Y-%m-%d %H:%M:%S UTC"),
            "(expired)".red()
        ),
        Some(expires_at) => println!("  Expires:   {}", expires_at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("  Expires:   {}", "never".bright_black()),
    }
}
