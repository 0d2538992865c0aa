//! Populates a superheroes database with a sample roster.

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use superheroes::seed::seed;
use superheroes::sql::{DEFAULT_DATABASE_URL, open_pool};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "SQLite database URL")]
    database_url: Option<String>,
    #[arrrg(flag, "Delete existing heroes, powers, and hero powers first")]
    reset: bool,
}

const USAGE: &str = r#"Usage: superheroes-seed [--database-url <URL>] [--reset]

Insert sample heroes, powers, and hero powers.

Arguments:
  --database-url <URL>    SQLite database connection URL [default: $DATABASE_URL or sqlite://superheroes.db]
  --reset                 Delete existing rows before seeding"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (options, free) = Options::from_command_line(USAGE);

    if !free.is_empty() {
        eprintln!("Error: Unexpected arguments: {:?}", free);
        eprintln!();
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let database_url = options
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    println!("Seeding database: {}", database_url);

    let pool = open_pool(&database_url).await?;
    let summary = seed(&pool, options.reset).await?;
    pool.close().await;

    println!(
        "Seeded {} heroes, {} powers, {} hero powers",
        summary.heroes, summary.powers, summary.hero_powers
    );

    Ok(())
}
