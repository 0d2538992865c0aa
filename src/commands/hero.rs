//! # Hero Command Handler
//!
//! Handles hero-related CLI commands.

use crate::{
    CreateHeroRequest, Hero, HeroDetail, cli_utils,
    commands::shared::{dispatch_command, parse_id_or_exit, validate_args_count_or_exit},
    http_utils,
};

const HERO_USAGE: &str = "Usage: heroctl hero <list|get|create|delete> [args...]";

/// Handles all hero-related commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the subcommand)
/// * `client` - HTTP client for API communication
/// * `output_format` - Output format for get/list commands
pub async fn handle_hero_command(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    dispatch_command!("hero", HERO_USAGE, args, client, output_format, {
        "list" => handle_hero_list,
        "get" => handle_hero_get,
        "create" => handle_hero_create,
        "delete" => handle_hero_delete,
    });
}

async fn handle_hero_list(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(args, 1, 1, "list", "Usage: heroctl hero list");
    let heroes = http_utils::execute_or_exit(
        || client.get::<Vec<Hero>>("heroes"),
        "Failed to list heroes",
    )
    .await;

    if heroes.is_empty() {
        println!("No heroes found");
    } else {
        cli_utils::print_formatted_or_exit(&heroes, output_format, "heroes");
    }
}

async fn handle_hero_get(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(args, 2, 2, "get", "Usage: heroctl hero get <hero-id>");

    let hero_id = parse_id_or_exit(&args[1], "hero ID");
    let path = format!("heroes/{}", hero_id);
    let error_msg = format!("Failed to get hero {}", hero_id);

    let hero = http_utils::execute_or_exit(|| client.get::<HeroDetail>(&path), &error_msg).await;

    cli_utils::print_formatted_or_exit(&hero, output_format, "hero");
}

async fn handle_hero_create(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(
        args,
        3,
        3,
        "create",
        r#"Usage: heroctl hero create <name> <super-name>
Example: heroctl hero create "Kamala Khan" "Ms. Marvel""#,
    );

    let request = CreateHeroRequest {
        name: Some(args[1].clone()),
        super_name: Some(args[2].clone()),
    };

    let hero = http_utils::execute_or_exit(
        || client.post::<CreateHeroRequest, Hero>("heroes", &request),
        "Failed to create hero",
    )
    .await;

    println!("Created hero:");
    cli_utils::print_formatted_or_exit(&hero, output_format, "hero");
}

async fn handle_hero_delete(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    _output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(args, 2, 2, "delete", "Usage: heroctl hero delete <hero-id>");

    let hero_id = parse_id_or_exit(&args[1], "hero ID");
    let path = format!("heroes/{}", hero_id);

    http_utils::execute_or_exit(|| client.delete(&path), "Failed to delete hero").await;

    println!("Deleted hero: {}", hero_id);
}
