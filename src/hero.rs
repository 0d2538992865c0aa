//! # Heroes
//!
//! A hero has a civilian `name` and a `super_name`, and owns any number of hero powers.
//! Deleting a hero deletes its hero powers.
//!
//! ## Endpoints
//!
//! - `GET /heroes` lists every hero as `{id, name, super_name}`
//! - `POST /heroes` creates a hero
//! - `GET /heroes/:id` returns the hero with its `hero_powers`, each carrying its power
//! - `DELETE /heroes/:id` removes the hero

use axum::Router;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::hero_power::HeroPowerWithPower;
use crate::sql;

/// A stored hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hero {
    /// Row id.
    pub id: i64,
    /// Civilian name.
    pub name: String,
    /// Super name.
    pub super_name: String,
}

/// A hero together with all of its hero powers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroDetail {
    /// Row id.
    pub id: i64,
    /// Civilian name.
    pub name: String,
    /// Super name.
    pub super_name: String,
    /// The hero's powers, ordered by hero power id.
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroDetail {
    /// Assembles the detailed view from a hero and its joined hero powers.
    pub fn new(hero: Hero, hero_powers: Vec<HeroPowerWithPower>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers,
        }
    }
}

/// Request to create a hero.  Both fields are required.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateHeroRequest {
    /// Civilian name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Super name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

async fn list_heroes(State(pool): State<SqlitePool>) -> Result<Json<Vec<Hero>>, ApiError> {
    let mut tx = pool.begin().await?;
    let heroes = sql::hero::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(heroes))
}

async fn get_hero(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<HeroDetail>, ApiError> {
    let Path(id) = path?;

    let mut tx = pool.begin().await?;
    let hero = sql::hero::get(&mut tx, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Hero not found"))?;
    let hero_powers = sql::hero_power::list_for_hero(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(HeroDetail::new(hero, hero_powers)))
}

async fn create_hero(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateHeroRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Hero>), ApiError> {
    let Json(request) = payload?;
    let (Some(name), Some(super_name)) = (request.name, request.super_name) else {
        warn!("create hero rejected: missing fields");
        return Err(ApiError::bad_request("name and super_name are required"));
    };

    let mut tx = pool.begin().await?;
    let hero = sql::hero::create(&mut tx, &name, &super_name).await?;
    tx.commit().await?;

    info!(hero_id = hero.id, super_name = %hero.super_name, "created hero");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn delete_hero(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    let mut tx = pool.begin().await?;
    if !sql::hero::delete(&mut tx, id).await? {
        return Err(ApiError::not_found("Hero not found"));
    }
    tx.commit().await?;

    info!(hero_id = id, "deleted hero");
    Ok(StatusCode::NO_CONTENT)
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates the HTTP router for hero endpoints.
pub fn create_hero_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route("/heroes/:id", get(get_hero).delete(delete_hero))
        .with_state(pool)
}
