use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::config::{EndpointApiRepository, EndpointDescriptor, EndpointRepository};
use crate::core::router::RouteTable;
use crate::routes::app_routes;

/// Shared application state, built once at the composition point and
/// passed by reference. There is no ambient global instance.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub graphql: Arc<EndpointDescriptor>,
}

pub fn build_app_state() -> Result<AppState> {
    // Load a local .env if present; real env always wins.
    dotenvy::dotenv().ok();

    let graphql = EndpointRepository::new()
        .load()
        .context("Failed to load GraphQL endpoint configuration")?;
    let routes = app_routes().context("Failed to build route table")?;

    info!(
        service = %graphql.service_name,
        url = %graphql.endpoint_url,
        routes = routes.root().children().len(),
        "application state ready"
    );

    Ok(AppState {
        routes: Arc::new(routes),
        graphql: Arc::new(graphql),
    })
}
