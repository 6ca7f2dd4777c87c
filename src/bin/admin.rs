//! CLI administration tool for shorturl.
//!
//! Works directly against PostgreSQL, so records can be inspected and
//! repaired without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Insert the sample records (`a`, `p`) if missing
//! cargo run --bin admin -- seed
//!
//! # Browse records
//! cargo run --bin admin -- record list --page 1 --page-size 20
//! cargo run --bin admin -- record show a
//!
//! # Create and delete records
//! cargo run --bin admin -- record create docs https://docs.rs --owner 7
//! cargo run --bin admin -- record delete docs
//! ```
//!
//! # Environment Variables
//!
//! Uses the same database settings as the server (`DATABASE_URL` or the
//! `DB_*` components).

use shorturl::application::services::{UrlService, sample_records};
use shorturl::config::Config;
use shorturl::domain::entities::NewShortenedUrl;
use shorturl::infrastructure::persistence::PgShortenedUrlRepository;
use shorturl::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type PgUrlService = UrlService<PgShortenedUrlRepository>;

/// CLI tool for managing shorturl.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Insert the sample records if they are missing
    Seed,

    /// Manage shortened URL records
    Record {
        #[command(subcommand)]
        action: RecordAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

/// Record management subcommands.
#[derive(Subcommand)]
enum RecordAction {
    /// List records ordered by id
    List {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        page: i64,

        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i64).range(1..=1000))]
        page_size: i64,
    },

    /// Show a single record
    Show {
        /// Short token
        token: String,
    },

    /// Create a record
    Create {
        /// Short token
        token: String,

        /// Target URL (http or https)
        url: String,

        /// Owner id
        #[arg(long, default_value_t = 0)]
        owner: i64,
    },

    /// Delete a record
    Delete {
        /// Short token
        token: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Seed => seed(service(&pool, &config)).await?,
        Commands::Record { action } => {
            handle_record_action(action, service(&pool, &config)).await?
        }
    }

    Ok(())
}

/// Builds the service with the same reserved tokens the server enforces.
fn service(pool: &PgPool, config: &Config) -> PgUrlService {
    let reserved = config
        .diagnostic_redirect
        .iter()
        .map(|d| d.segment().to_string());

    UrlService::new(Arc::new(PgShortenedUrlRepository::new(Arc::new(
        pool.clone(),
    ))))
    .with_reserved_tokens(reserved)
}

/// Handles database maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run database migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

async fn seed(service: PgUrlService) -> Result<()> {
    let inserted = service
        .preload(sample_records())
        .await
        .context("Failed to insert sample records")?;

    if inserted == 0 {
        println!("{}", "Sample records already present".yellow());
    } else {
        println!(
            "{} {}",
            "Inserted sample records:".green().bold(),
            inserted.to_string().bright_white().bold()
        );
    }

    Ok(())
}

/// Dispatches record management commands.
async fn handle_record_action(action: RecordAction, service: PgUrlService) -> Result<()> {
    match action {
        RecordAction::List { page, page_size } => list_records(&service, page, page_size).await,
        RecordAction::Show { token } => show_record(&service, &token).await,
        RecordAction::Create { token, url, owner } => {
            let created = service
                .create(NewShortenedUrl::new(token, url, owner))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create record: {e}"))?;

            println!("{}", "Record created".green().bold());
            println!(
                "  {} -> {}",
                created.short_token.cyan(),
                created.original_url.bright_white()
            );
            Ok(())
        }
        RecordAction::Delete { token, yes } => delete_record(&service, &token, yes).await,
    }
}

/// Prints one page of records.
///
/// # Output Format
///
/// ```text
///   ID     Token            Owner  Enabled  Target
///   -----------------------------------------------------------
///   1      a                1      yes      http://abc.com
/// ```
async fn list_records(service: &PgUrlService, page: i64, page_size: i64) -> Result<()> {
    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count records: {e}"))?;
    let records = service
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list records: {e}"))?;

    if records.is_empty() {
        println!("{}", "  No records found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<16} {:<6} {:<8} {}",
        "ID".bright_white().bold(),
        "Token".bright_white().bold(),
        "Owner".bright_white().bold(),
        "Enabled".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for record in &records {
        let enabled = if record.enabled {
            "yes".green()
        } else {
            "no".red()
        };

        println!(
            "  {:<6} {:<16} {:<6} {:<8} {}",
            record.id.to_string().bright_black(),
            record.short_token.cyan(),
            record.owner_id,
            enabled,
            record.original_url
        );
    }

    println!();
    println!(
        "  Page {} ({} of {} records)",
        page,
        records.len(),
        total.to_string().bright_white().bold()
    );

    Ok(())
}

async fn show_record(service: &PgUrlService, token: &str) -> Result<()> {
    let record = service
        .get_by_token(token)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {e}"))?
        .context("Record not found")?;

    println!("  ID:            {}", record.id);
    println!("  Token:         {}", record.short_token.cyan());
    println!("  Target:        {}", record.original_url.bright_white());
    println!("  Owner:         {}", record.owner_id);
    println!("  Enabled:       {}", record.enabled);
    println!(
        "  Created:       {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  Last modified: {}",
        record.last_modified_at.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}

/// Deletes a record after confirmation (default: No).
async fn delete_record(service: &PgUrlService, token: &str, skip_confirm: bool) -> Result<()> {
    let record = service
        .get_by_token(token)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {e}"))?
        .context("Record not found")?;

    println!(
        "  {} -> {}",
        record.short_token.cyan(),
        record.original_url.bright_white()
    );

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this record?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete record: {e}"))?;

    println!("{}", "Record deleted".green().bold());
    Ok(())
}
