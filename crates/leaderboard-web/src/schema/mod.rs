mod mutation;
mod query;
mod scalars;
mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema, ID};
use leaderboard::{bucket::Bucket, coerce, ErrorKind};
use log::{error, warn};
use sea_orm::DatabaseConnection;

pub use self::{mutation::MutationRoot, query::QueryRoot};

pub type LeaderboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Shared by every resolver.
pub struct State {
    pub db: DatabaseConnection,
    pub bucket: Arc<dyn Bucket>,
}

pub fn build(db: DatabaseConnection, bucket: Arc<dyn Bucket>) -> LeaderboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(State { db, bucket })
        .finish()
}

/// GraphQL ids arrive as text. Anything that does not coerce to a positive
/// integer counts as missing.
fn parse_id(id: Option<ID>) -> Option<i32> {
    id.and_then(|id| coerce::id(&id))
}

/// Turns store errors into GraphQL errors carrying a `code` extension.
trait ApiResult<T> {
    fn api(self) -> async_graphql::Result<T>;
}

impl<T> ApiResult<T> for Result<T, leaderboard::Error> {
    fn api(self) -> async_graphql::Result<T> {
        self.map_err(|err| {
            let kind = err.kind();

            match kind {
                ErrorKind::Validation | ErrorKind::NotFound => warn!("Rejected request: {err}"),
                ErrorKind::Configuration | ErrorKind::Storage => error!("Request failed: {err}"),
            }

            err.extend_with(|_, extensions| extensions.set("code", kind.code()))
        })
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::{value, Request, Variables};
    use leaderboard::bucket::NoBucket;
    use serde_json::json;

    use super::*;

    async fn schema() -> LeaderboardSchema {
        let db = database::connect("sqlite::memory:").await.unwrap();
        database::migrate(&db).await.unwrap();

        build(db, Arc::new(NoBucket))
    }

    async fn run(schema: &LeaderboardSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        response.data.into_json().unwrap()
    }

    fn error_code(response: &async_graphql::Response) -> Option<String> {
        let extensions = response.errors.first()?.extensions.as_ref()?;

        match extensions.get("code")? {
            async_graphql::Value::String(code) => Some(code.clone()),
            _ => None,
        }
    }

    /// Builds a tournament with one weight and one points category and
    /// returns the tournament id.
    async fn seed(schema: &LeaderboardSchema) -> String {
        let data = run(
            schema,
            r#"mutation {
                tournamentCreate(input: { name: "Torneo de Pez Vela", date: "2024-03-09" }) { id slug }
            }"#,
        )
        .await;
        let tournament = data["tournamentCreate"]["id"].as_str().unwrap().to_string();

        let weight = run(schema, &format!(
            r#"mutation {{ categoryCreate(tournamentId: "{tournament}", input: {{ name: "Marlin", limit: 2 }}) {{ id }} }}"#
        ))
        .await["categoryCreate"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        let points = run(schema, &format!(
            r#"mutation {{ categoryCreate(tournamentId: "{tournament}", input: {{ name: "Puntos", type: points, limit: 1 }}) {{ id }} }}"#
        ))
        .await["categoryCreate"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        let boat = run(schema, &format!(
            r#"mutation {{ boatCreate(tournamentId: "{tournament}", input: {{ name: "La Gaviota" }}) {{ id }} }}"#
        ))
        .await["boatCreate"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let mut fishermen = Vec::new();
        for name in ["Ana", "Beto"] {
            let id = run(schema, &format!(
                r#"mutation {{ fishermanCreate(tournamentId: "{tournament}", input: {{ name: "{name}" }}) {{ id }} }}"#
            ))
            .await["fishermanCreate"]["id"]
                .as_str()
                .unwrap()
                .to_string();
            fishermen.push(id);
        }

        let catches = [
            (&weight, &fishermen[0], 5.0, "2024-03-09T10:00:00Z"),
            (&weight, &fishermen[1], 9.0, "2024-03-09T11:00:00Z"),
            (&weight, &fishermen[0], 9.0, "2024-03-09T10:30:00Z"),
            (&points, &fishermen[0], 3.0, "2024-03-09T10:00:00Z"),
            (&points, &fishermen[0], 4.0, "2024-03-09T12:00:00Z"),
            (&points, &fishermen[1], 5.0, "2024-03-09T11:00:00Z"),
        ];
        for (category, fisherman, value, date) in catches {
            run(schema, &format!(
                r#"mutation {{
                    entryCreate(
                        tournamentId: "{tournament}",
                        input: {{ categoryId: "{category}", fishermanId: "{fisherman}", boatId: "{boat}", value: {value:.1}, date: "{date}" }}
                    ) {{ id }}
                }}"#
            ))
            .await;
        }

        tournament
    }

    #[tokio::test]
    async fn latest_tournament_leaderboards() {
        let schema = schema().await;
        seed(&schema).await;

        let data = run(
            &schema,
            r#"{
                tournament(latest: true) {
                    slug
                    categories {
                        name
                        type
                        limit
                        entries { value date fisherman { name } }
                    }
                }
            }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({
                "tournament": {
                    "slug": "torneo-de-pez-vela",
                    "categories": [
                        {
                            "name": "Marlin",
                            "type": "weight",
                            "limit": 2,
                            "entries": [
                                { "value": 9.0, "date": "2024-03-09T10:30:00.000Z", "fisherman": { "name": "Ana" } },
                                { "value": 9.0, "date": "2024-03-09T11:00:00.000Z", "fisherman": { "name": "Beto" } }
                            ]
                        },
                        {
                            "name": "Puntos",
                            "type": "points",
                            "limit": 1,
                            "entries": [
                                { "value": 7.0, "date": "2024-03-09T12:00:00.000Z", "fisherman": { "name": "Ana" } }
                            ]
                        }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn ignore_limit_returns_every_entry() {
        let schema = schema().await;
        let tournament = seed(&schema).await;

        let data = run(
            &schema,
            &format!(
                r#"{{ tournament(id: "{tournament}") {{ categories {{ entries(ignoreLimit: true) {{ id }} }} }} }}"#
            ),
        )
        .await;

        let categories = data["tournament"]["categories"].as_array().unwrap();
        assert_eq!(categories[0]["entries"].as_array().unwrap().len(), 3);
        assert_eq!(categories[1]["entries"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn disabling_a_fisherman_hides_their_entries() {
        let schema = schema().await;
        let tournament = seed(&schema).await;

        let data = run(
            &schema,
            &format!(r#"{{ tournament(id: "{tournament}") {{ fishermans {{ id name }} }} }}"#),
        )
        .await;
        let ana = data["tournament"]["fishermans"][0]["id"].as_str().unwrap().to_string();

        run(
            &schema,
            &format!(r#"mutation {{ fishermanUpdate(input: {{ id: "{ana}", isEnabled: false }}) {{ isEnabled }} }}"#),
        )
        .await;

        let data = run(
            &schema,
            &format!(
                r#"{{ tournament(id: "{tournament}") {{ entries {{ fisherman {{ name }} }} }} }}"#
            ),
        )
        .await;

        assert_eq!(
            data["tournament"]["entries"],
            json!([{ "fisherman": { "name": "Beto" } }, { "fisherman": { "name": "Beto" } }])
        );
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let schema = schema().await;

        let response = schema
            .execute(r#"mutation { fishermanCreate(input: { name: "Ana" }) { id } }"#)
            .await;

        assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
        assert_eq!(
            response.errors[0].message,
            "Cannot create fisherman because required property 'tournamentId' is missing"
        );
    }

    #[tokio::test]
    async fn update_without_changes_is_rejected() {
        let schema = schema().await;
        let tournament = seed(&schema).await;

        let response = schema
            .execute(format!(r#"mutation {{ tournamentUpdate(input: {{ id: "{tournament}" }}) {{ id }} }}"#))
            .await;

        assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let schema = schema().await;

        let response = schema
            .execute(r#"mutation { boatUpdate(input: { id: "77", name: "Fantasma" }) { id } }"#)
            .await;

        assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
    }

    #[tokio::test]
    async fn delete_returns_null_when_nothing_matched() {
        let schema = schema().await;
        let tournament = seed(&schema).await;

        let data = run(
            &schema,
            &format!(r#"mutation {{ first: tournamentDelete(id: "{tournament}") again: tournamentDelete(id: "{tournament}") }}"#),
        )
        .await;

        assert_eq!(data, json!({ "first": tournament, "again": null }));
    }

    #[tokio::test]
    async fn garbage_ids_count_as_missing() {
        let schema = schema().await;

        let response = schema
            .execute(r#"mutation { entryDelete(id: "abc") }"#)
            .await;

        assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn sails_round_trip_dates() {
        let schema = schema().await;

        let request = Request::new(
            r#"mutation($departure: Date!, $arrival: Date!) {
                sailCreate(input: {
                    boat: "La Gaviota", captain: "Rosa", crew: 3, destination: "Cozumel",
                    departure: $departure, arrival: $arrival
                }) { departure arrival }
            }"#,
        )
        .variables(Variables::from_json(json!({
            "departure": "2024-04-02T08:00:00-06:00",
            "arrival": 1_712_080_800_000_i64,
        })));
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        assert_eq!(
            response.data,
            value!({
                "sailCreate": {
                    "departure": "2024-04-02T14:00:00.000Z",
                    "arrival": "2024-04-02T18:00:00.000Z"
                }
            })
        );

        let data = run(
            &schema,
            r#"{ sails(start: "2024-04-01", end: "2024-04-02") { destination } }"#,
        )
        .await;
        assert_eq!(data, json!({ "sails": [{ "destination": "Cozumel" }] }));
    }

    #[tokio::test]
    async fn unknown_stored_category_type_is_a_configuration_error() {
        use database::entities::tournament_category;
        use sea_orm::{ActiveModelTrait, ActiveValue};

        let db = database::connect("sqlite::memory:").await.unwrap();
        database::migrate(&db).await.unwrap();
        let schema = build(db.clone(), Arc::new(NoBucket));
        let tournament = seed(&schema).await;

        tournament_category::ActiveModel {
            tournament_id: ActiveValue::set(tournament.parse::<i32>().unwrap()),
            name: ActiveValue::set("Longitud".to_string()),
            category_type: ActiveValue::set("length".to_string()),
            category_limit: ActiveValue::set(1),
            created_at: ActiveValue::set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let response = schema
            .execute(format!(r#"{{ tournament(id: "{tournament}") {{ categories {{ name }} }} }}"#))
            .await;

        assert_eq!(error_code(&response).as_deref(), Some("CONFIGURATION_ERROR"));
    }

    #[tokio::test]
    async fn sails_window_must_be_ordered() {
        let schema = schema().await;

        let response = schema
            .execute(r#"{ sails(start: "2024-04-05", end: "2024-04-01") { id } }"#)
            .await;

        assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn file_groups_without_a_bucket_are_empty() {
        let schema = schema().await;

        let data = run(&schema, "{ fileGroups { id } events { id } }").await;

        assert_eq!(data, json!({ "fileGroups": [], "events": [] }));

        let response = schema.execute("{ fileGroup { id } }").await;
        assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
    }
}
