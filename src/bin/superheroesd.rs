use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use superheroes::create_router;
use superheroes::sql::{DEFAULT_DATABASE_URL, open_pool};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Args {
    #[arrrg(optional, "SQLite connection string for the superheroes database")]
    database_url: Option<String>,
    #[arrrg(optional, "Host to bind the HTTP server")]
    host: Option<String>,
    #[arrrg(optional, "Port to bind the HTTP server")]
    port: Option<u16>,
    #[arrrg(flag, "Enable verbose logging")]
    verbose: bool,
}

const HELP_TEXT: &str = r#"superheroesd - Superheroes daemon

USAGE:
    superheroesd [OPTIONS]

OPTIONS:
    --database-url <URL> SQLite connection string [default: $DATABASE_URL or sqlite://superheroes.db]
    --host <HOST>        Host to bind the HTTP server [default: 127.0.0.1]
    --port <PORT>        Port to bind the HTTP server [default: 5555]
    --verbose            Enable verbose logging

DESCRIPTION:
    Serves heroes, powers, and hero powers over HTTP.  The database is created
    and migrated on startup.  RUST_LOG overrides the log filter.

    The server supports graceful shutdown via Ctrl+C.

API ENDPOINTS:
    Heroes:
      GET    /heroes              List all heroes
      POST   /heroes              Create a hero
      GET    /heroes/{id}         Get a hero with its powers
      DELETE /heroes/{id}         Delete a hero and its hero powers

    Powers:
      GET    /powers              List all powers
      POST   /powers              Create a power
      GET    /powers/{id}         Get a power
      PATCH  /powers/{id}         Update a power's description
      DELETE /powers/{id}         Delete a power and its hero powers

    Hero Powers:
      GET    /hero_powers         List all hero powers
      POST   /hero_powers         Link a hero to a power"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) = Args::from_command_line("USAGE: superheroesd [OPTIONS]");

    if !free.is_empty() && free[0] == "help" {
        println!("{}", HELP_TEXT);
        return Ok(());
    }

    let config = ServerConfig::from_args(args);
    init_tracing(config.verbose);

    info!(database_url = %config.database_url, "opening database");
    let pool = open_pool(&config.database_url)
        .await
        .map_err(|e| format!("Failed to open {}: {}", config.database_url, e))?;

    let app = create_router(pool.clone());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!(address = %addr, "superheroes daemon listening");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;

    if let Err(e) = result {
        error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("superheroes daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server gracefully");
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "superheroes=debug,tower_http=debug"
    } else {
        "superheroes=info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

struct ServerConfig {
    database_url: String,
    host: String,
    port: u16,
    verbose: bool,
}

impl ServerConfig {
    fn from_args(args: Args) -> Self {
        Self {
            database_url: args
                .database_url
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: args.host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: args.port.unwrap_or(5555),
            verbose: args.verbose,
        }
    }
}
