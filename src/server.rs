use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{self, IntoResponse},
    routing::get,
};

use crate::error::Result;
use crate::graphql::DemoSchema;

async fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Serve the schema over HTTP. `GET /` is the GraphiQL playground,
/// `POST /` executes GraphQL requests. Blocks until the listener fails.
pub async fn run_server(schema: DemoSchema, port: u16) -> Result<()> {
    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("server is running on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
