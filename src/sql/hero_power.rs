//! SQL operations for hero power management.
//!
//! A hero power links exactly one hero to exactly one power.  Both references are
//! checked inside the caller's transaction before the insert, and the schema's
//! foreign keys back that check up and cascade deletes from either side.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, Transaction};

use crate::errors::DataStoreError;
use crate::hero_power::{HeroPower, HeroPowerWithPower, Strength};
use crate::power::Power;
use crate::sql;

/// Inserts a hero power after confirming the hero and power exist.
pub async fn create(
    tx: &mut Transaction<'_, Sqlite>,
    strength: Strength,
    hero_id: i64,
    power_id: i64,
) -> Result<HeroPower, DataStoreError> {
    if sql::hero::get(tx, hero_id).await?.is_none() {
        return Err(DataStoreError::ForeignKeyViolation(format!(
            "Hero {} does not exist",
            hero_id
        )));
    }
    if sql::power::get(tx, power_id).await?.is_none() {
        return Err(DataStoreError::ForeignKeyViolation(format!(
            "Power {} does not exist",
            power_id
        )));
    }

    let result = sqlx::query("INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?)")
        .bind(strength.as_str())
        .bind(hero_id)
        .bind(power_id)
        .execute(&mut **tx)
        .await?;

    Ok(HeroPower {
        id: result.last_insert_rowid(),
        hero_id,
        power_id,
        strength,
    })
}

/// Gets a hero power by id.
pub async fn get(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> Result<Option<HeroPower>, DataStoreError> {
    let row = sqlx::query("SELECT id, strength, hero_id, power_id FROM hero_powers WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    row.as_ref().map(hero_power_from_row).transpose()
}

/// Lists all hero powers ordered by id.
pub async fn list(tx: &mut Transaction<'_, Sqlite>) -> Result<Vec<HeroPower>, DataStoreError> {
    let rows = sqlx::query("SELECT id, strength, hero_id, power_id FROM hero_powers ORDER BY id")
        .fetch_all(&mut **tx)
        .await?;
    rows.iter().map(hero_power_from_row).collect()
}

/// Lists a hero's powers, each joined with the power it refers to.
pub async fn list_for_hero(
    tx: &mut Transaction<'_, Sqlite>,
    hero_id: i64,
) -> Result<Vec<HeroPowerWithPower>, DataStoreError> {
    let rows = sqlx::query(
        r#"
        SELECT hp.id, hp.strength, hp.hero_id, hp.power_id,
               p.name AS power_name, p.description AS power_description
        FROM hero_powers hp
        JOIN powers p ON p.id = hp.power_id
        WHERE hp.hero_id = ?
        ORDER BY hp.id
        "#,
    )
    .bind(hero_id)
    .fetch_all(&mut **tx)
    .await?;

    rows.iter()
        .map(|row| -> Result<HeroPowerWithPower, DataStoreError> {
            let hero_power = hero_power_from_row(row)?;
            let power = Power {
                id: hero_power.power_id,
                name: row.try_get("power_name")?,
                description: row.try_get("power_description")?,
            };
            Ok(HeroPowerWithPower::new(hero_power, power))
        })
        .collect()
}

fn hero_power_from_row(row: &SqliteRow) -> Result<HeroPower, DataStoreError> {
    let strength: String = row.try_get("strength")?;
    let strength = strength
        .parse::<Strength>()
        .map_err(|e| DataStoreError::Internal(format!("corrupt hero_powers row: {}", e)))?;
    Ok(HeroPower {
        id: row.try_get("id")?,
        hero_id: row.try_get("hero_id")?,
        power_id: row.try_get("power_id")?,
        strength,
    })
}
