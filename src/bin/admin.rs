//! CLI administration tool for TinyFox.
//!
//! Inspects and manages short links directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show everything about a link
//! cargo run --bin admin -- link info my-code
//!
//! # List the newest links
//! cargo run --bin admin -- link recent --limit 20
//!
//! # Switch a link off
//! cargo run --bin admin -- link deactivate my-code
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`)
//! - `BASE_URL` for printed short URLs

use tinyfox::application::services::LinkService;
use tinyfox::config::{Config, StorageBackend};
use tinyfox::domain::entities::Link;
use tinyfox::infrastructure::persistence::PgLinkRepository;
use tinyfox::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing TinyFox.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show a link's target, counters and status
    Info {
        /// Short code
        code: String,
    },

    /// List the most recently created links
    Recent {
        /// Number of links to show (1-100)
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Deactivate a link so it stops redirecting
    Deactivate {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type Service = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.storage = StorageBackend::Postgres;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => {
            let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
            let service = LinkService::new(repo, config.base_url.clone(), config.code_length);
            handle_link_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::Info { code } => show_link(service, &code).await,
        LinkAction::Recent { limit } => list_recent(service, limit).await,
        LinkAction::Deactivate { code, yes } => deactivate_link(service, &code, yes).await,
    }
}

async fn show_link(service: &Service, code: &str) -> Result<()> {
    let link = service
        .get_info(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:          {}", link.code.cyan());
    println!("  Short URL:     {}", service.short_url(&link.code).bright_white());
    println!("  Target:        {}", link.long_url);
    println!(
        "  Created:       {}",
        link.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!(
        "  Clicks:        {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Last accessed: {}",
        link.last_accessed
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string())
    );
    println!(
        "  Expires:       {}",
        link.expires_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string())
    );
    println!("  Status:        {}", status_label(&link));
    if let Some(note) = &link.note {
        println!("  Note:          {}", note);
    }
    println!();

    Ok(())
}

/// Lists recent links.
///
/// # Output Format
///
/// ```text
/// 📋 Recent links
///
///   Code             Clicks   Created            Status    Target
///   ────────────────────────────────────────────────────────────────────
///   aZ3kP9q          12       2025-01-15 10:30   ACTIVE    https://example.com/...
/// ```
async fn list_recent(service: &Service, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent links".bright_blue().bold());
    println!();

    let links = service
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<16} {:<8} {:<18} {:<9} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<16} {:<8} {:<18} {:<9} {}",
            link.code.cyan(),
            link.clicks,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(link),
            truncate(&link.long_url, 60)
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deactivates a link with confirmation prompt (default: No).
async fn deactivate_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔒 Deactivate link".bright_blue().bold());
    println!();

    let link = service
        .get_info(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    if !link.active {
        println!("{}", "⚠️  This link is already inactive".yellow());
        return Ok(());
    }

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.long_url);
    println!("  Clicks: {}", link.clicks);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Deactivate this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let changed = service
        .deactivate(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to deactivate link: {}", e))?;

    println!();
    if changed {
        println!("{}", "✅ Link deactivated".green().bold());
    } else {
        println!("{}", "⚠️  Link was deactivated concurrently".yellow());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;
            let active: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE active")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL:   {}", version.bright_white());
            println!("  Links:        {}", links.to_string().bright_green().bold());
            println!("  Active links: {}", active.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

fn status_label(link: &Link) -> ColoredString {
    if !link.active {
        "INACTIVE".red()
    } else if link.is_expired() {
        "EXPIRED".yellow()
    } else {
        "ACTIVE".green()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
