use async_graphql::{ID, SimpleObject};

/// A demo user record. Manufactured fresh on every request; there is no
/// backing store and no identity beyond the literal `id` value.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub rating: f64,
}

impl User {
    pub fn demo() -> Self {
        Self {
            id: ID::from("12311"),
            name: "sohaib".to_string(),
            email: "spam@spam4.me".to_string(),
            age: 24,
            rating: 4.3,
        }
    }
}

/// A demo post record, also recreated per request. `published` is declared
/// as a boolean and is always `false`.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub published: bool,
}

impl Post {
    pub fn demo() -> Self {
        Self {
            id: ID::from("43114edf21"),
            title: "Learn GraphQL".to_string(),
            body: "Comming soon...".to_string(),
            published: false,
        }
    }
}
