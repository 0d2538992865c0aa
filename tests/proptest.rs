use axum::http::StatusCode;
use axum_test::TestServer;
use proptest::prelude::*;
use serde_json::{Value, json};

use superheroes::seed::seed;
use superheroes::sql::open_pool;
use superheroes::{
    HeroPower, MAX_DESCRIPTION_LENGTH, MIN_DESCRIPTION_LENGTH, Power, Strength, ValidationError, create_router,
    validate_description,
};

/// Test infrastructure for property testing the superheroes API
async fn seeded_server() -> TestServer {
    let pool = open_pool("sqlite::memory:").await.unwrap();
    seed(&pool, false).await.unwrap();
    TestServer::new(create_router(pool)).unwrap()
}

/// Property test strategies for generating test data
pub mod strategies {
    use super::*;
    use proptest::string::string_regex;

    /// Strings that are never one of the three strength names
    pub fn invalid_strength_strategy() -> impl Strategy<Value = String> {
        any::<String>().prop_filter("must not be a valid strength", |s| {
            !matches!(s.as_str(), "Strong" | "Weak" | "Average")
        })
    }

    /// Descriptions with fewer than twenty characters
    pub fn short_description_strategy() -> impl Strategy<Value = String> {
        string_regex(r"[a-zA-Z ]{0,19}").unwrap()
    }

    /// Descriptions between twenty and five hundred characters
    pub fn valid_description_strategy() -> impl Strategy<Value = String> {
        string_regex(r"[a-zA-Z][a-zA-Z ,.'-]{19,200}").unwrap()
    }

    /// One of the allowed strengths
    pub fn strength_strategy() -> impl Strategy<Value = Strength> {
        prop_oneof![
            Just(Strength::Strong),
            Just(Strength::Weak),
            Just(Strength::Average),
        ]
    }
}

proptest! {
    #[test]
    fn strength_rejects_everything_else(value in strategies::invalid_strength_strategy()) {
        prop_assert_eq!(
            value.parse::<Strength>(),
            Err(ValidationError::InvalidStrength { value: value.clone() })
        );
    }

    #[test]
    fn description_length_threshold(description in any::<String>()) {
        let length = description.chars().count();
        let result = validate_description(&description);
        if length == 0 {
            prop_assert_eq!(result, Err(ValidationError::EmptyDescription));
        } else if length < MIN_DESCRIPTION_LENGTH {
            prop_assert_eq!(result, Err(ValidationError::DescriptionTooShort));
        } else if length > MAX_DESCRIPTION_LENGTH {
            prop_assert_eq!(result, Err(ValidationError::DescriptionTooLong));
        } else {
            prop_assert_eq!(result, Ok(()));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn api_rejects_invalid_strength(value in strategies::invalid_strength_strategy()) {
        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let server = seeded_server().await;
            let before: Vec<HeroPower> = server.get("/hero_powers").await.json();

            let response = server
                .post("/hero_powers")
                .json(&json!({"strength": value, "power_id": 1, "hero_id": 1}))
                .await;

            prop_assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            let after: Vec<HeroPower> = server.get("/hero_powers").await.json();
            prop_assert_eq!(before, after);
            Ok(())
        })?;
    }

    #[test]
    fn api_rejects_short_descriptions(description in strategies::short_description_strategy()) {
        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let server = seeded_server().await;
            let original: Power = server.get("/powers/2").await.json();

            let response = server
                .patch("/powers/2")
                .json(&json!({"description": description}))
                .await;

            prop_assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            prop_assert!(body["errors"].is_array());
            let stored: Power = server.get("/powers/2").await.json();
            prop_assert_eq!(stored, original);
            Ok(())
        })?;
    }

    #[test]
    fn api_accepts_valid_descriptions(description in strategies::valid_description_strategy()) {
        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let server = seeded_server().await;

            let response = server
                .patch("/powers/3")
                .json(&json!({"description": description}))
                .await;

            prop_assert_eq!(response.status_code(), StatusCode::OK);
            let updated: Power = response.json();
            prop_assert_eq!(updated.description, description);
            Ok(())
        })?;
    }

    #[test]
    fn api_links_any_valid_strength(strength in strategies::strength_strategy(), hero_id in 1i64..=10, power_id in 1i64..=4) {
        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let server = seeded_server().await;

            let response = server
                .post("/hero_powers")
                .json(&json!({"strength": strength, "power_id": power_id, "hero_id": hero_id}))
                .await;

            prop_assert_eq!(response.status_code(), StatusCode::OK);
            let body: Value = response.json();
            prop_assert_eq!(&body["strength"], &json!(strength.as_str()));
            prop_assert_eq!(&body["hero"]["id"], &json!(hero_id));
            prop_assert_eq!(&body["power"]["id"], &json!(power_id));
            Ok(())
        })?;
    }
}
