//! CLI administration tool for clicklink.
//!
//! Manages short links, shows statistics, and performs database checks
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Create a link with a custom code
//! cargo run --bin admin -- links create https://example.com --code promo24
//!
//! # Show one link
//! cargo run --bin admin -- links show promo24
//!
//! # Delete a link
//! cargo run --bin admin -- links delete promo24 --yes
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): used to print full short URLs

use clicklink::application::services::LinkService;
use clicklink::domain::entities::Link;
use clicklink::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing clicklink.
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
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a new short link
    Create {
        /// Target URL (http or https)
        url: String,

        /// Custom code, 6-8 letters or digits (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a single link
    Show {
        code: String,
    },

    /// Delete a link
    Delete {
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

type PgLinkService = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let base_url = std::env::var("BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .trim_end_matches('/')
        .to_string();

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool, &base_url).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, base_url: &str) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Create { url, code } => {
            create_link(&service, &url, code.as_deref(), base_url).await?
        }
        LinkAction::Show { code } => show_link(&service, &code, base_url).await?,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await?,
    }

    Ok(())
}

/// Lists all links in a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code      Clicks  Last click        Created           URL
///   ──────────────────────────────────────────────────────────────────────────
///   aB3xYz    12      2024-01-16 08:02  2024-01-15 10:30  https://example.com/page
///   Qx81mZp   0       Never             2024-01-14 09:11  https://rust-lang.org
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last click".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for link in &links {
        let clicks = if link.has_clicks() {
            link.click_count.to_string().bright_green()
        } else {
            link.click_count.to_string().bright_black()
        };
        let last_click = last_click_label(link, "%Y-%m-%d %H:%M");

        println!(
            "  {:<9} {:<7} {:<17} {:<17} {}",
            link.code.cyan(),
            clicks,
            last_click.bright_black(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a link through the same rules as the HTTP API.
async fn create_link(
    service: &PgLinkService,
    url: &str,
    code: Option<&str>,
    base_url: &str,
) -> Result<()> {
    println!("{}", "✨ Create Short Link".bright_blue().bold());
    println!();

    let link = service
        .create_link(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(&link, base_url);

    Ok(())
}

/// Shows a single link with its statistics.
async fn show_link(service: &PgLinkService, code: &str, base_url: &str) -> Result<()> {
    let link = service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_link(&link, base_url);

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &PgLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Short Link".bright_blue().bold());
    println!();

    let link = service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("  Code: {}", link.code.cyan());
    println!("  URL:  {}", link.original_url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Last redirect time in `format`, or "Never".
fn last_click_label(link: &Link, format: &str) -> String {
    link.last_clicked_at
        .map(|t| t.format(format).to_string())
        .unwrap_or_else(|| "Never".to_string())
}

fn print_link(link: &Link, base_url: &str) {
    let last_clicked = last_click_label(link, "%Y-%m-%d %H:%M:%S UTC");

    println!("  Short URL:    {}", format!("{}/{}", base_url, link.code).bright_yellow());
    println!("  Original:     {}", link.original_url);
    println!(
        "  Clicks:       {}",
        link.click_count.to_string().bright_green().bold()
    );
    println!("  Last clicked: {}", last_clicked.bright_black());
    println!(
        "  Created:      {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Total number of clicks
/// - Links that were never clicked
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0)::BIGINT FROM links")
            .fetch_one(pool)
            .await?;

    let unclicked_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE click_count = 0")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:         {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!(
        "  Never clicked: {}",
        unclicked_count.to_string().bright_green().bold()
    );
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
