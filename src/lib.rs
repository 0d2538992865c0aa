//! # Superheroes: Heroes, Powers, and the Links Between Them
//!
//! This crate serves a small relational catalogue over HTTP:
//!
//! - **Heroes** have a civilian name and a super name
//! - **Powers** have a name and a description of at least twenty characters
//! - **Hero powers** link one hero to one power with a strength of `Strong`, `Weak`,
//!   or `Average`
//!
//! Deleting a hero or a power deletes the hero powers that refer to it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ HTTP API Layer (Axum routes)            │
//! ├─────────────────────────────────────────┤
//! │ Validation (field checks)               │
//! ├─────────────────────────────────────────┤
//! │ SQL operations (one transaction/request)│
//! ├─────────────────────────────────────────┤
//! │ SQLite (foreign keys, cascades)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every handler opens one transaction, performs its reads and writes through [`sql`],
//! and commits only when everything succeeded.  Errors drop the transaction, which
//! rolls it back.
//!
//! ## Errors
//!
//! Missing records become `404 {"error": "..."}`.  Missing fields, failed validation,
//! dangling references and storage failures become `400 {"errors": ["..."]}`.
//!
//! ## Usage
//!
//! ```rust
//! use superheroes::{Strength, ValidationError, validate_description};
//!
//! assert_eq!("Average".parse::<Strength>(), Ok(Strength::Average));
//! assert!(matches!(
//!     "Mighty".parse::<Strength>(),
//!     Err(ValidationError::InvalidStrength { .. })
//! ));
//! assert!(validate_description("can stretch the human body to extreme lengths").is_ok());
//! ```

mod errors;
mod hero;
mod hero_power;
mod power;
mod router;
mod validate;

/// Command-line interface utilities for program termination and output formatting.
pub mod cli_utils;

/// Command-line interface command handlers for `heroctl`.
pub mod commands;

/// HTTP client utilities for talking to a running superheroes service.
pub mod http_utils;

/// Sample data for populating a fresh database.
pub mod seed;

/// SQLite connection, migrations, and per-table operations.
pub mod sql;

pub use errors::{ApiError, DataStoreError};
pub use hero::{CreateHeroRequest, Hero, HeroDetail, create_hero_router};
pub use hero_power::{
    CreateHeroPowerRequest, HeroPower, HeroPowerDetail, HeroPowerWithPower, Strength,
    create_hero_power_router,
};
pub use power::{CreatePowerRequest, Power, UpdatePowerRequest, create_power_router};
pub use router::create_router;
pub use validate::{
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MIN_DESCRIPTION_LENGTH, ValidationError,
    validate_description, validate_name,
};
