//! # Command Handlers
//!
//! Command handlers for the heroctl CLI application, one submodule per resource.
//!
//! ## Structure
//!
//! - `hero` - Hero commands (list, get, create, delete)
//! - `power` - Power commands (list, get, create, update, delete)
//! - `hero_power` - Hero power commands (list, create)
//! - `shared` - Argument validation and dispatch helpers

pub mod hero;
pub mod hero_power;
pub mod power;
pub mod shared;

pub use hero::handle_hero_command;
pub use hero_power::handle_hero_power_command;
pub use power::handle_power_command;
