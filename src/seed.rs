//! Sample roster used to populate a fresh database.
//!
//! Seeding goes through the same validated SQL operations as the HTTP API and runs in a
//! single transaction, so a failure leaves the database untouched.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::DataStoreError;
use crate::hero_power::Strength;
use crate::sql;

/// `(name, description)` for each sample power.
pub const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    (
        "elasticity",
        "can stretch the human body to extreme lengths",
    ),
];

/// `(name, super_name)` for each sample hero.
pub const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

/// Counts of the rows a seeding run inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// Heroes inserted.
    pub heroes: usize,
    /// Powers inserted.
    pub powers: usize,
    /// Hero powers inserted.
    pub hero_powers: usize,
}

/// Inserts the sample roster.  With `reset`, existing rows are deleted first.
///
/// Every hero receives one power, rotating through the sample powers and strengths.
pub async fn seed(pool: &SqlitePool, reset: bool) -> Result<SeedSummary, DataStoreError> {
    let mut tx = pool.begin().await?;

    if reset {
        sqlx::query("DELETE FROM hero_powers")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM heroes").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM powers").execute(&mut *tx).await?;
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let power = sql::power::create(&mut tx, name, description).await?;
        power_ids.push(power.id);
    }

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        let hero = sql::hero::create(&mut tx, name, super_name).await?;
        hero_ids.push(hero.id);
    }

    let mut hero_powers = 0;
    for (index, hero_id) in hero_ids.iter().enumerate() {
        let power_id = power_ids[index % power_ids.len()];
        let strength = Strength::ALL[index % Strength::ALL.len()];
        sql::hero_power::create(&mut tx, strength, *hero_id, power_id).await?;
        hero_powers += 1;
    }

    tx.commit().await?;

    Ok(SeedSummary {
        heroes: hero_ids.len(),
        powers: power_ids.len(),
        hero_powers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_description, validate_name};

    #[test]
    fn sample_data_is_valid() {
        for (name, description) in POWERS {
            assert_eq!(validate_name("name", name), Ok(()));
            assert_eq!(validate_description(description), Ok(()));
        }
        for (name, super_name) in HEROES {
            assert_eq!(validate_name("name", name), Ok(()));
            assert_eq!(validate_name("super_name", super_name), Ok(()));
        }
    }

    #[tokio::test]
    async fn seed_inserts_roster() {
        let pool = sql::tests::setup_test_db().await;

        let summary = seed(&pool, false).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                heroes: HEROES.len(),
                powers: POWERS.len(),
                hero_powers: HEROES.len(),
            }
        );

        let mut tx = pool.begin().await.unwrap();
        let heroes = sql::hero::list(&mut tx).await.unwrap();
        let first = sql::hero_power::list_for_hero(&mut tx, heroes[0].id)
            .await
            .unwrap();
        assert_eq!(heroes.len(), HEROES.len());
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].strength, Strength::Strong);
        assert_eq!(first[0].power.name, "super strength");
    }

    #[tokio::test]
    async fn reseed_with_reset_replaces_rows() {
        let pool = sql::tests::setup_test_db().await;

        seed(&pool, false).await.unwrap();
        seed(&pool, true).await.unwrap();

        let mut tx = pool.begin().await.unwrap();
        assert_eq!(sql::hero::list(&mut tx).await.unwrap().len(), HEROES.len());
        assert_eq!(sql::power::list(&mut tx).await.unwrap().len(), POWERS.len());
        assert_eq!(
            sql::hero_power::list(&mut tx).await.unwrap().len(),
            HEROES.len()
        );
    }
}
