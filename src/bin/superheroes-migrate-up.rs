//! Database migration tool for superheroes.
//!
//! This binary runs database migrations using sqlx's embedded migrations.
//! Migrations are embedded into the binary at compile time from the `migrations/` directory.

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use superheroes::sql::MIGRATOR;

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(required, "SQLite database URL")]
    database_url: String,
}

const USAGE: &str = r#"Usage: superheroes-migrate-up --database-url <URL>

Run database migrations for superheroes.

Arguments:
  --database-url <URL>    SQLite database connection URL

Example:
  superheroes-migrate-up --database-url sqlite://superheroes.db

The database file is created if it does not exist.
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

    let connect_options: sqlx::sqlite::SqliteConnectOptions = options.database_url.parse()?;
    let pool = sqlx::SqlitePool::connect_with(connect_options.create_if_missing(true)).await?;

    println!("Running migrations...");

    MIGRATOR.run(&pool).await?;

    println!("Migrations completed successfully!");

    Ok(())
}
