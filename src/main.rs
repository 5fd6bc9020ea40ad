use anyhow::Result;
use clap::Parser;

use gqldemo::cli::{Cli, Commands};
use gqldemo::error::GqlDemoError;
use gqldemo::graphql::build_schema;
use gqldemo::logging;
use gqldemo::server::run_server;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Serve { port } => cmd_serve(port),
        Commands::Query { query, variables } => Ok(cmd_query(&query, variables.as_deref())?),
        Commands::Sdl => {
            println!("{}", build_schema().sdl().trim_end());
            Ok(())
        }
    }
}

fn cmd_serve(port: u16) -> Result<()> {
    let schema = build_schema();

    println!("Starting GraphQL server on http://localhost:{}", port);
    println!("GraphQL Playground: http://localhost:{}", port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, port).await })?;
    Ok(())
}

fn cmd_query(query: &str, variables: Option<&str>) -> gqldemo::error::Result<()> {
    let schema = build_schema();

    let mut request = async_graphql::Request::new(query);
    if let Some(raw) = variables {
        let json: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| GqlDemoError::InvalidVariables(e.to_string()))?;
        request = request.variables(async_graphql::Variables::from_json(json));
    }

    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
