pub mod resolver;
pub mod route;

pub use resolver::{normalize_path, ResolvedChain};
pub use route::{Route, RouteTable};
