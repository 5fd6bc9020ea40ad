//! GraphQL schema and resolvers for gqldemo.
//!
//! The queryable surface is deliberately tiny: five fields returning static
//! or trivially computed values, and two object types built from hardcoded
//! records. Every resolver is a pure function of its arguments; nothing here
//! touches a data store or shared state.
//!
//! ## Schema
//!
//! - **Queries**: `greeting`, `add`, `grades`, `user`, `post`
//! - **Types**: `User`, `Post`
//! - No mutations, no subscriptions.

mod schema;
mod types;

pub use schema::{DemoSchema, QueryRoot, build_schema};
pub use types::*;
