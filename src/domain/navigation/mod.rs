pub mod navigation_service;

pub use navigation_service::{path_for, resolve_route, resolve_route_or_default};
