use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};

use super::types::{Post, User};

pub type DemoSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema() -> DemoSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Greet the caller, by name when one is given
    async fn greeting(&self, name: Option<String>) -> String {
        match name {
            Some(name) => format!("Welcome {name}!"),
            None => "Welcome!".to_string(),
        }
    }

    /// Add two numbers. A missing operand contributes zero.
    async fn add(&self, a: Option<f64>, b: Option<f64>) -> f64 {
        a.unwrap_or_default() + b.unwrap_or_default()
    }

    /// A fixed set of grades. The input list is accepted and ignored.
    async fn grades(&self, grades: Vec<i32>) -> Vec<i32> {
        let _ = grades;
        vec![99, 70, 88, 75]
    }

    /// Get the demo user
    async fn user(&self) -> User {
        User::demo()
    }

    /// Get the demo post
    async fn post(&self) -> Post {
        Post::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn run(query: &str) -> serde_json::Value {
        let response = build_schema().execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn greeting_without_name() {
        assert_eq!(run("{ greeting }").await, json!({ "greeting": "Welcome!" }));
    }

    #[tokio::test]
    async fn greeting_with_name() {
        assert_eq!(
            run(r#"{ greeting(name: "Ada") }"#).await,
            json!({ "greeting": "Welcome Ada!" })
        );
    }

    #[tokio::test]
    async fn add_two_numbers() {
        assert_eq!(run("{ add(a: 2, b: 3) }").await, json!({ "add": 5.0 }));
    }

    #[tokio::test]
    async fn add_accepts_fractional_operands() {
        assert_eq!(
            run("{ add(a: 1.5, b: 2.25) }").await,
            json!({ "add": 3.75 })
        );
    }

    #[tokio::test]
    async fn add_treats_missing_operands_as_zero() {
        assert_eq!(run("{ add(a: 2) }").await, json!({ "add": 2.0 }));
        assert_eq!(run("{ add }").await, json!({ "add": 0.0 }));
    }

    #[tokio::test]
    async fn grades_ignores_input() {
        let expected = json!({ "grades": [99, 70, 88, 75] });
        assert_eq!(run("{ grades(grades: [1, 2, 3]) }").await, expected);
        assert_eq!(run("{ grades(grades: []) }").await, expected);
    }

    #[tokio::test]
    async fn grades_argument_is_required() {
        let response = build_schema().execute("{ grades }").await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn user_returns_fixed_record() {
        assert_eq!(
            run("{ user { id name email age rating } }").await,
            json!({
                "user": {
                    "id": "12311",
                    "name": "sohaib",
                    "email": "spam@spam4.me",
                    "age": 24,
                    "rating": 4.3
                }
            })
        );
    }

    #[tokio::test]
    async fn post_returns_fixed_record() {
        assert_eq!(
            run("{ post { id title body published } }").await,
            json!({
                "post": {
                    "id": "43114edf21",
                    "title": "Learn GraphQL",
                    "body": "Comming soon...",
                    "published": false
                }
            })
        );
    }

    #[tokio::test]
    async fn unknown_field_yields_default_errors() {
        let response = build_schema().execute("{ nope }").await;
        assert!(!response.errors.is_empty());
    }

    #[test]
    fn sdl_declares_the_query_surface() {
        let sdl = build_schema().sdl();
        assert!(sdl.contains("type Query"));
        assert!(sdl.contains("type User"));
        assert!(sdl.contains("type Post"));
        assert!(sdl.contains("greeting(name: String): String!"));
        assert!(sdl.contains("grades(grades: [Int!]!): [Int!]!"));
    }
}
