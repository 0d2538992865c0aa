//! # Hero Power Command Handler
//!
//! Handles commands that link heroes to powers.

use crate::{
    CreateHeroPowerRequest, HeroPower, HeroPowerDetail, Strength, cli_utils,
    commands::shared::{dispatch_command, parse_id_or_exit, validate_args_count_or_exit},
    http_utils,
};

const HERO_POWER_USAGE: &str = "Usage: heroctl hero-power <list|create> [args...]";

/// Handles all hero-power-related commands.
pub async fn handle_hero_power_command(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    dispatch_command!("hero-power", HERO_POWER_USAGE, args, client, output_format, {
        "list" => handle_hero_power_list,
        "create" => handle_hero_power_create,
    });
}

async fn handle_hero_power_list(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(args, 1, 1, "list", "Usage: heroctl hero-power list");
    let hero_powers = http_utils::execute_or_exit(
        || client.get::<Vec<HeroPower>>("hero_powers"),
        "Failed to list hero powers",
    )
    .await;

    if hero_powers.is_empty() {
        println!("No hero powers found");
    } else {
        cli_utils::print_formatted_or_exit(&hero_powers, output_format, "hero powers");
    }
}

async fn handle_hero_power_create(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(
        args,
        4,
        4,
        "create",
        r#"Usage: heroctl hero-power create <hero-id> <power-id> <Strong|Weak|Average>
Example: heroctl hero-power create 1 2 Average"#,
    );

    let hero_id = parse_id_or_exit(&args[1], "hero ID");
    let power_id = parse_id_or_exit(&args[2], "power ID");
    // Checked locally so a typo fails before any request is made.
    let strength: Strength = args[3]
        .parse()
        .unwrap_or_else(|e| cli_utils::exit_with_error(&format!("{}", e)));

    let request = CreateHeroPowerRequest {
        strength: Some(strength.to_string()),
        power_id: Some(power_id),
        hero_id: Some(hero_id),
    };

    let hero_power = http_utils::execute_or_exit(
        || client.post::<CreateHeroPowerRequest, HeroPowerDetail>("hero_powers", &request),
        "Failed to create hero power",
    )
    .await;

    println!("Created hero power:");
    cli_utils::print_formatted_or_exit(&hero_power, output_format, "hero power");
}
