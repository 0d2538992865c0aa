//! SQL operations for hero management.

use sqlx::{Sqlite, Transaction};

use crate::errors::DataStoreError;
use crate::hero::Hero;
use crate::validate::validate_name;

/// Validates and inserts a new hero, returning it with its assigned id.
pub async fn create(
    tx: &mut Transaction<'_, Sqlite>,
    name: &str,
    super_name: &str,
) -> Result<Hero, DataStoreError> {
    validate_name("name", name)?;
    validate_name("super_name", super_name)?;

    let result = sqlx::query("INSERT INTO heroes (name, super_name) VALUES (?, ?)")
        .bind(name)
        .bind(super_name)
        .execute(&mut **tx)
        .await?;

    Ok(Hero {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        super_name: super_name.to_string(),
    })
}

/// Gets a hero by id.
pub async fn get(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<Option<Hero>, DataStoreError> {
    let hero = sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(hero)
}

/// Lists all heroes ordered by id.
pub async fn list(tx: &mut Transaction<'_, Sqlite>) -> Result<Vec<Hero>, DataStoreError> {
    let heroes = sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes ORDER BY id")
        .fetch_all(&mut **tx)
        .await?;
    Ok(heroes)
}

/// Deletes a hero and, by cascade, its hero powers.  Returns false if no hero had the id.
pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<bool, DataStoreError> {
    let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(result.rows_affected() > 0)
}
