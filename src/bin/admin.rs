//! CLI administration tool for url-mapper.
//!
//! Manages mappings and inspects the database without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping
//! cargo run --bin admin -- mapping create https://example.com
//!
//! # Show where a code points
//! cargo run --bin admin -- mapping show 67e55044-10b1-426f-9247-bb680e5fe0c8
//!
//! # Delete a mapping (asks for confirmation unless -y)
//! cargo run --bin admin -- mapping delete 67e55044-10b1-426f-9247-bb680e5fe0c8
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
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite://url-mapper.db`)

use url_mapper::config::Config;
use url_mapper::server::{build_state, prepare_database};
use url_mapper::state::AppMappingService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;

/// CLI tool for managing url-mapper.
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
    /// Manage mappings
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// Create a mapping for a URL
    Create {
        /// Absolute URL to map
        url: String,
    },

    /// Print the URL stored for a code
    Show {
        code: String,
    },

    /// Delete a mapping
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

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let pool = prepare_database(&config).await?;

    match cli.command {
        Commands::Mapping { action } => {
            let state = build_state(pool.clone());
            handle_mapping_action(action, &state.mapping_service).await?
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches mapping management commands.
async fn handle_mapping_action(action: MappingAction, service: &AppMappingService) -> Result<()> {
    match action {
        MappingAction::Create { url } => {
            let mapping = service
                .create_mapping(&url)
                .await
                .context("Failed to create mapping")?;

            println!("{}", "✅ Mapping created".green().bold());
            println!("  Code: {}", mapping.code_string().bright_green().bold());
            println!("  URL:  {}", mapping.url.cyan());
        }
        MappingAction::Show { code } => {
            let mapping = service.resolve_mapping(&code).await?;

            println!("  Code: {}", mapping.code_string().bright_white());
            println!("  URL:  {}", mapping.url.cyan());
        }
        MappingAction::Delete { code, yes } => delete_mapping(service, code, yes).await?,
    }

    Ok(())
}

/// Deletes a mapping after showing it and asking for confirmation.
///
/// Deletion is permanent; the code can never be resolved again.
async fn delete_mapping(service: &AppMappingService, code: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Mapping".bright_blue().bold());
    println!();

    let mapping = service.resolve_mapping(&code).await?;

    println!("  Code: {}", mapping.code_string().cyan());
    println!("  URL:  {}", mapping.url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.deactivate_mapping(&code).await?;

    println!("{}", "✅ Mapping deleted".green().bold());
    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await?;

    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
