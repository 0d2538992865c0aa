//! SQL operations for power management.

use sqlx::{Sqlite, Transaction};

use crate::errors::DataStoreError;
use crate::power::Power;
use crate::validate::{validate_description, validate_name};

/// Validates and inserts a new power, returning it with its assigned id.
pub async fn create(
    tx: &mut Transaction<'_, Sqlite>,
    name: &str,
    description: &str,
) -> Result<Power, DataStoreError> {
    validate_name("name", name)?;
    validate_description(description)?;

    let result = sqlx::query("INSERT INTO powers (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(&mut **tx)
        .await?;

    Ok(Power {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        description: description.to_string(),
    })
}

/// Gets a power by id.
pub async fn get(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<Option<Power>, DataStoreError> {
    let power = sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(power)
}

/// Lists all powers ordered by id.
pub async fn list(tx: &mut Transaction<'_, Sqlite>) -> Result<Vec<Power>, DataStoreError> {
    let powers = sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers ORDER BY id")
        .fetch_all(&mut **tx)
        .await?;
    Ok(powers)
}

/// Validates and stores a new description, returning the updated power.
///
/// Fails with [`DataStoreError::NotFound`] when no power has the id.
pub async fn update_description(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
    description: &str,
) -> Result<Power, DataStoreError> {
    validate_description(description)?;

    let result = sqlx::query("UPDATE powers SET description = ? WHERE id = ?")
        .bind(description)
        .bind(id)
        .execute(&mut **tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataStoreError::NotFound);
    }

    get(tx, id).await?.ok_or(DataStoreError::NotFound)
}

/// Deletes a power and, by cascade, its hero powers.  Returns false if no power had the id.
pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<bool, DataStoreError> {
    let result = sqlx::query("DELETE FROM powers WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(result.rows_affected() > 0)
}
