//! # Hero Powers
//!
//! A hero power links one hero to one power with a [`Strength`] rating.  Creating one
//! requires all three fields, a valid strength, and existing hero and power ids.
//!
//! ## Endpoints
//!
//! - `GET /hero_powers` lists every link as `{id, hero_id, power_id, strength}`
//! - `POST /hero_powers` creates a link and returns it with nested hero and power

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::errors::{ApiError, DataStoreError};
use crate::hero::Hero;
use crate::power::Power;
use crate::sql;
use crate::validate::ValidationError;

////////////////////////////////////////////// Strength //////////////////////////////////////////////

/// How strongly a hero wields a power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// "Strong"
    Strong,
    /// "Weak"
    Weak,
    /// "Average"
    Average,
}

impl Strength {
    /// Every allowed strength.
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    /// The stored and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStrength {
                value: s.to_string(),
            })
    }
}

////////////////////////////////////////////// Records //////////////////////////////////////////////

/// A stored hero power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPower {
    /// Row id.
    pub id: i64,
    /// The hero holding the power.
    pub hero_id: i64,
    /// The power held.
    pub power_id: i64,
    /// How strongly the hero wields it.
    pub strength: Strength,
}

/// A hero power with its power inlined, as nested under a hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPowerWithPower {
    /// Row id.
    pub id: i64,
    /// The hero holding the power.
    pub hero_id: i64,
    /// The power held.
    pub power_id: i64,
    /// How strongly the hero wields it.
    pub strength: Strength,
    /// The referenced power.
    pub power: Power,
}

impl HeroPowerWithPower {
    /// Pairs a hero power with the power it references.
    pub fn new(hero_power: HeroPower, power: Power) -> Self {
        Self {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
            power,
        }
    }
}

/// A hero power with both ends inlined, as returned from creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPowerDetail {
    /// Row id.
    pub id: i64,
    /// The hero holding the power.
    pub hero_id: i64,
    /// The power held.
    pub power_id: i64,
    /// How strongly the hero wields it.
    pub strength: Strength,
    /// The referenced hero.
    pub hero: Hero,
    /// The referenced power.
    pub power: Power,
}

/// Request to link a hero to a power.  All fields are required.
///
/// `strength` stays a string here so that an unknown value is reported as a
/// validation error rather than a malformed body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateHeroPowerRequest {
    /// One of "Strong", "Weak", "Average".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    /// The power to link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_id: Option<i64>,
    /// The hero to link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_id: Option<i64>,
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

async fn list_hero_powers(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<HeroPower>>, ApiError> {
    let mut tx = pool.begin().await?;
    let hero_powers = sql::hero_power::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(hero_powers))
}

async fn create_hero_power(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> Result<Json<HeroPowerDetail>, ApiError> {
    let Json(request) = payload?;
    let (Some(strength), Some(power_id), Some(hero_id)) =
        (request.strength, request.power_id, request.hero_id)
    else {
        warn!("create hero power rejected: missing fields");
        return Err(ApiError::bad_request(
            "strength, power_id, and hero_id are required",
        ));
    };

    let strength = strength.parse::<Strength>().inspect_err(|e| {
        warn!(error = %e, "create hero power rejected");
    })?;

    let mut tx = pool.begin().await?;
    let hero_power = match sql::hero_power::create(&mut tx, strength, hero_id, power_id).await {
        Ok(hero_power) => hero_power,
        Err(e) => {
            warn!(hero_id, power_id, error = %e, "create hero power rejected");
            return Err(e.into());
        }
    };
    let hero = sql::hero::get(&mut tx, hero_id)
        .await?
        .ok_or(DataStoreError::NotFound)?;
    let power = sql::power::get(&mut tx, power_id)
        .await?
        .ok_or(DataStoreError::NotFound)?;
    tx.commit().await?;

    info!(
        hero_power_id = hero_power.id,
        hero_id,
        power_id,
        strength = %strength,
        "created hero power"
    );
    Ok(Json(HeroPowerDetail {
        id: hero_power.id,
        hero_id: hero_power.hero_id,
        power_id: hero_power.power_id,
        strength: hero_power.strength,
        hero,
        power,
    }))
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates the HTTP router for hero power endpoints.
pub fn create_hero_power_router(pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/hero_powers",
            get(list_hero_powers).post(create_hero_power),
        )
        .with_state(pool)
}
