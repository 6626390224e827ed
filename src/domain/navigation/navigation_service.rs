use tracing::{debug, warn};

use crate::core::router::{normalize_path, ResolvedChain, RouteTable};
use crate::errors::ResolveError;

/// Resolve raw navigation input to a component chain.
///
/// Input may be a raw hash fragment (`#/productform`); it is normalized
/// before hitting the table.
pub fn resolve_route(table: &RouteTable, raw_path: &str) -> Result<ResolvedChain, ResolveError> {
    let path = normalize_path(raw_path);
    match table.resolve(&path) {
        Ok(chain) => {
            debug!(%path, leaf = chain.leaf_name(), depth = chain.len(), "route resolved");
            Ok(chain)
        }
        Err(err) => {
            warn!(%path, %err, "route resolution failed");
            Err(err)
        }
    }
}

/// Resolve like [`resolve_route`], but fall back to the default route on
/// a miss instead of surfacing `NoMatch`.
pub fn resolve_route_or_default(
    table: &RouteTable,
    raw_path: &str,
) -> Result<ResolvedChain, ResolveError> {
    match resolve_route(table, raw_path) {
        Err(ResolveError::NoMatch(path)) => {
            debug!(%path, fallback = table.default_path(), "falling back to default route");
            table.resolve(table.default_path())
        }
        other => other,
    }
}

/// Reverse lookup: the path registered under `name`.
pub fn path_for(table: &RouteTable, name: &str) -> Result<String, ResolveError> {
    match table.resolve_by_name(name) {
        Ok(path) => Ok(path.to_string()),
        Err(err) => {
            warn!(%name, %err, "reverse route lookup failed");
            Err(err)
        }
    }
}
