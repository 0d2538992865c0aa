//! # Power Command Handler
//!
//! Handles power-related CLI commands.

use crate::{
    CreatePowerRequest, Power, UpdatePowerRequest, cli_utils,
    commands::shared::{dispatch_command, parse_id_or_exit, validate_args_count_or_exit},
    http_utils,
};

const POWER_USAGE: &str = "Usage: heroctl power <list|get|create|update|delete> [args...]";

/// Handles all power-related commands.
pub async fn handle_power_command(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    dispatch_command!("power", POWER_USAGE, args, client, output_format, {
        "list" => handle_power_list,
        "get" => handle_power_get,
        "create" => handle_power_create,
        "update" => handle_power_update,
        "delete" => handle_power_delete,
    });
}

async fn handle_power_list(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(args, 1, 1, "list", "Usage: heroctl power list");
    let powers = http_utils::execute_or_exit(
        || client.get::<Vec<Power>>("powers"),
        "Failed to list powers",
    )
    .await;

    if powers.is_empty() {
        println!("No powers found");
    } else {
        cli_utils::print_formatted_or_exit(&powers, output_format, "powers");
    }
}

async fn handle_power_get(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(args, 2, 2, "get", "Usage: heroctl power get <power-id>");

    let power_id = parse_id_or_exit(&args[1], "power ID");
    let path = format!("powers/{}", power_id);
    let error_msg = format!("Failed to get power {}", power_id);

    let power = http_utils::execute_or_exit(|| client.get::<Power>(&path), &error_msg).await;

    cli_utils::print_formatted_or_exit(&power, output_format, "power");
}

async fn handle_power_create(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(
        args,
        3,
        3,
        "create",
        r#"Usage: heroctl power create <name> <description>
Example: heroctl power create flight "gives the wielder the ability to fly""#,
    );

    let request = CreatePowerRequest {
        name: Some(args[1].clone()),
        description: Some(args[2].clone()),
    };

    let power = http_utils::execute_or_exit(
        || client.post::<CreatePowerRequest, Power>("powers", &request),
        "Failed to create power",
    )
    .await;

    println!("Created power:");
    cli_utils::print_formatted_or_exit(&power, output_format, "power");
}

async fn handle_power_update(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(
        args,
        3,
        3,
        "update",
        "Usage: heroctl power update <power-id> <description>",
    );

    let power_id = parse_id_or_exit(&args[1], "power ID");
    let path = format!("powers/{}", power_id);
    let request = UpdatePowerRequest {
        description: Some(args[2].clone()),
    };
    let error_msg = format!("Failed to update power {}", power_id);

    let power = http_utils::execute_or_exit(
        || client.patch::<UpdatePowerRequest, Power>(&path, &request),
        &error_msg,
    )
    .await;

    println!("Updated power:");
    cli_utils::print_formatted_or_exit(&power, output_format, "power");
}

async fn handle_power_delete(
    args: &[String],
    client: &http_utils::SuperheroesClient,
    _output_format: cli_utils::OutputFormat,
) {
    validate_args_count_or_exit(
        args,
        2,
        2,
        "delete",
        "Usage: heroctl power delete <power-id>",
    );

    let power_id = parse_id_or_exit(&args[1], "power ID");
    let path = format!("powers/{}", power_id);

    http_utils::execute_or_exit(|| client.delete(&path), "Failed to delete power").await;

    println!("Deleted power: {}", power_id);
}
