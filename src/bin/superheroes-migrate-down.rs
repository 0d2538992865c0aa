//! Database migration rollback tool for superheroes.
//!
//! This binary reverts the most recent database migration using sqlx's embedded migrations.
//! Migrations are embedded into the binary at compile time from the `migrations/` directory.

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use superheroes::sql::MIGRATOR;

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(required, "SQLite database URL")]
    database_url: String,
}

const USAGE: &str = r#"Usage: superheroes-migrate-down --database-url <URL>

Revert the most recent database migration for superheroes.

Arguments:
  --database-url <URL>    SQLite database connection URL

Example:
  superheroes-migrate-down --database-url sqlite://superheroes.db

The migrations are embedded at compile time from the migrations/ directory."#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (options, free) = Options::from_command_line(USAGE);

    if !free.is_empty() {
        eprintln!("Error: Unexpected arguments: {:?}", free);
        eprintln!();
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    println!("Connecting to database: {}", options.database_url);

    let pool = sqlx::SqlitePool::connect(&options.database_url).await?;

    // Undo reverts every migration newer than the target, so aim at the one before the latest.
    let mut versions: Vec<i64> = MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .map(|m| m.version)
        .collect();
    versions.sort_unstable();
    versions.pop();
    let target = versions.pop().unwrap_or(0);

    println!("Reverting most recent migration...");

    MIGRATOR.undo(&pool, target).await?;

    println!("Migration reverted successfully!");

    Ok(())
}
