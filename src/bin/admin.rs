//! CLI administration tool for the course catalog.
//!
//! Provides record counts, database diagnostics and guarded deletes without
//! going through the web pages.
//!
//! # Usage
//!
//! ```bash
//! # Record counts per entity kind
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Delete instructor 12 (refused while sections reference it)
//! cargo run --bin admin -- delete instructor 12
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_USER`/`DB_PASSWORD`/`DB_NAME` (see `courseinfo::config`)

use courseinfo::application::services::CrudService;
use courseinfo::config::Config;
use courseinfo::domain::deletion_guard::{ChildRecord, DeleteOutcome};
use courseinfo::domain::entities::Entity;
use courseinfo::domain::kind::EntityKind;
use courseinfo::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the course catalog.
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
    /// Show record counts per entity kind
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Delete a record unless other records still reference it
    Delete {
        /// Entity kind: instructor, course, semester, section, student or registration
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,

        /// Record ID
        id: i64,

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

fn parse_kind(value: &str) -> Result<EntityKind, String> {
    EntityKind::from_slug(&value.to_lowercase()).ok_or_else(|| {
        let known: Vec<_> = EntityKind::ALL.iter().map(|k| k.slug()).collect();
        format!("unknown kind '{value}', expected one of: {}", known.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool, config.page_size).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Delete { kind, id, yes } => {
            let state = AppState::postgres(Arc::new(pool), config.page_size);
            handle_delete(&state, kind, id, yes).await?;
        }
    }

    Ok(())
}

/// Displays record counts for every entity kind.
async fn handle_stats(pool: &PgPool, page_size: u32) -> Result<()> {
    println!("{}", "Catalog statistics".bright_blue().bold());
    println!();

    let state = AppState::postgres(Arc::new(pool.clone()), page_size);

    let counts = [
        (EntityKind::Instructor, state.instructors.count().await?),
        (EntityKind::Course, state.courses.count().await?),
        (EntityKind::Semester, state.semesters.count().await?),
        (EntityKind::Section, state.sections.count().await?),
        (EntityKind::Student, state.students.count().await?),
        (EntityKind::Registration, state.registrations.count().await?),
    ];

    for (kind, count) in counts {
        println!(
            "  {:<15} {}",
            format!("{}:", kind.plural()),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Dispatches a guarded delete to the service for `kind`.
async fn handle_delete(state: &AppState, kind: EntityKind, id: i64, yes: bool) -> Result<()> {
    match kind {
        EntityKind::Instructor => delete_record(state.instructors.as_ref(), id, yes).await,
        EntityKind::Course => delete_record(state.courses.as_ref(), id, yes).await,
        EntityKind::Semester => delete_record(state.semesters.as_ref(), id, yes).await,
        EntityKind::Section => delete_record(state.sections.as_ref(), id, yes).await,
        EntityKind::Student => delete_record(state.students.as_ref(), id, yes).await,
        EntityKind::Registration => delete_record(state.registrations.as_ref(), id, yes).await,
    }
}

/// Deletes one record with a confirmation prompt.
///
/// # Flow
///
/// 1. Load the record (fails if it does not exist)
/// 2. Refuse with the list of children if any reference it
/// 3. Confirm (unless `--yes`)
/// 4. Run the transactional guarded delete
async fn delete_record<E: Entity>(service: &CrudService<E>, id: i64, yes: bool) -> Result<()> {
    let kind = service.kind();
    println!(
        "{}",
        format!("Delete {}", kind.singular().to_lowercase())
            .bright_blue()
            .bold()
    );
    println!();

    let (entity, check) = service.check_deletable(id).await?;

    println!(
        "  {} {}",
        format!("{kind}:").bright_white(),
        entity.label().cyan()
    );
    println!("  ID: {}", id.to_string().bright_black());
    println!();

    if !check.is_deletable() {
        print_blocking_children(check.blocking_children());
        return Err(refused(kind, id, check.blocking_children()));
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete this {}?", kind.singular().to_lowercase()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    match service.delete(id).await.context("Failed to delete")? {
        DeleteOutcome::Deleted => {
            println!("{}", "Deleted successfully".green().bold());
            println!();
            Ok(())
        }
        DeleteOutcome::Blocked(children) => {
            print_blocking_children(&children);
            Err(refused(kind, id, &children))
        }
    }
}

/// Error returned when children block a delete, so the exit status is non-zero.
fn refused(kind: EntityKind, id: i64, children: &[ChildRecord]) -> anyhow::Error {
    anyhow::anyhow!(
        "{} {} was not deleted: {} record(s) still refer to it",
        kind,
        id,
        children.len()
    )
}

fn print_blocking_children(children: &[ChildRecord]) {
    println!(
        "{}",
        "Cannot delete: the following records still refer to it"
            .red()
            .bold()
    );
    for child in children {
        println!(
            "  {:<13} {:<6} {}",
            child.kind.singular().bright_white(),
            child.id.to_string().bright_black(),
            child.label.cyan()
        );
    }
}
