//! Navigation core of the lyfegentt client.
//!
//! Owns the two static surfaces of the single-page shell: the GraphQL
//! endpoint descriptor and the route table mapping URL paths to lazily
//! loaded page components. Resolution is pure and synchronous; the only
//! suspension point is dereferencing a matched [`ComponentRef`].

pub mod app_state;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;

pub use crate::app_state::{build_app_state, AppState};
pub use crate::core::component::{Component, ComponentLoader, ComponentRef};
pub use crate::core::config::EndpointDescriptor;
pub use crate::core::router::{normalize_path, ResolvedChain, Route, RouteTable};
pub use crate::errors::{ComponentLoadError, ResolveError, RouteTableError};

use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
