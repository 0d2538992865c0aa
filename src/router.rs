use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::hero::create_hero_router;
use crate::hero_power::create_hero_power_router;
use crate::power::create_power_router;

/// Assembles every superheroes endpoint on one router sharing `pool`.
pub fn create_router(pool: SqlitePool) -> Router {
    Router::new()
        .merge(create_hero_router(pool.clone()))
        .merge(create_power_router(pool.clone()))
        .merge(create_hero_power_router(pool))
        .layer(TraceLayer::new_for_http())
}
