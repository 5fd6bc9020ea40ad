//! # gqldemo - a minimal GraphQL server
//!
//! A small, self-contained GraphQL endpoint for demonstrating schemas and
//! resolvers. The schema exposes five query fields and two object types
//! (`User`, `Post`); every resolver returns a static or trivially computed
//! value, so there is no storage, no authentication, and no mutation surface.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the HTTP server with a GraphiQL playground
//! gqldemo serve --port 4000
//!
//! # Execute a query from the CLI
//! gqldemo query '{ greeting(name: "Ada") }'
//!
//! # Print the schema in SDL form
//! gqldemo sdl
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`server`]: axum HTTP transport

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines `GqlDemoError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql query root and object types.
pub mod graphql;

/// axum HTTP transport.
///
/// Serves the schema over HTTP with a GraphiQL playground.
pub mod server;

pub mod logging;
