//! # Powers
//!
//! A power is a named ability with a description of at least twenty characters.  The
//! description is checked on every create and update.
//!
//! ## Endpoints
//!
//! - `GET /powers` lists every power
//! - `POST /powers` creates a power
//! - `GET /powers/:id` returns one power
//! - `PATCH /powers/:id` replaces the description
//! - `DELETE /powers/:id` removes the power and its hero powers

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
use crate::sql;

/// A stored power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Power {
    /// Row id.
    pub id: i64,
    /// Name of the ability.
    pub name: String,
    /// What the ability does; at least twenty characters.
    pub description: String,
}

/// Request to create a power.  Both fields are required.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreatePowerRequest {
    /// Name of the ability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// What the ability does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update of a power.  Only the description can change.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdatePowerRequest {
    /// The new description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

async fn list_powers(State(pool): State<SqlitePool>) -> Result<Json<Vec<Power>>, ApiError> {
    let mut tx = pool.begin().await?;
    let powers = sql::power::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(powers))
}

async fn get_power(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Power>, ApiError> {
    let Path(id) = path?;

    let mut tx = pool.begin().await?;
    let power = sql::power::get(&mut tx, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Power not found"))?;
    tx.commit().await?;

    Ok(Json(power))
}

async fn create_power(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreatePowerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Power>), ApiError> {
    let Json(request) = payload?;
    let (Some(name), Some(description)) = (request.name, request.description) else {
        warn!("create power rejected: missing fields");
        return Err(ApiError::bad_request("name and description are required"));
    };

    let mut tx = pool.begin().await?;
    let power = sql::power::create(&mut tx, &name, &description).await?;
    tx.commit().await?;

    info!(power_id = power.id, name = %power.name, "created power");
    Ok((StatusCode::CREATED, Json(power)))
}

async fn update_power(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> Result<Json<Power>, ApiError> {
    let Path(id) = path?;

    let mut tx = pool.begin().await?;
    if sql::power::get(&mut tx, id).await?.is_none() {
        return Err(ApiError::not_found("Power not found"));
    }

    let Json(request) = payload?;
    let Some(description) = request.description else {
        warn!(power_id = id, "update power rejected: missing description");
        return Err(ApiError::bad_request("description is required"));
    };

    let power = match sql::power::update_description(&mut tx, id, &description).await {
        Ok(power) => power,
        Err(e) => {
            warn!(power_id = id, error = %e, "update power rejected");
            return Err(e.into());
        }
    };
    tx.commit().await?;

    info!(power_id = id, "updated power description");
    Ok(Json(power))
}

async fn delete_power(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;

    let mut tx = pool.begin().await?;
    if !sql::power::delete(&mut tx, id).await? {
        return Err(ApiError::not_found("Power not found"));
    }
    tx.commit().await?;

    info!(power_id = id, "deleted power");
    Ok(StatusCode::NO_CONTENT)
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates the HTTP router for power endpoints.
pub fn create_power_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/powers", get(list_powers).post(create_power))
        .route(
            "/powers/:id",
            get(get_power).patch(update_power).delete(delete_power),
        )
        .with_state(pool)
}
