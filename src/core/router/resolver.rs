use crate::core::component::ComponentRef;
use crate::errors::ResolveError;

use super::route::{Route, RouteTable};

/// Root-to-leaf result of a successful resolution.
///
/// Components are instantiated in order: the first entry wraps the
/// second, and so on down to the matched leaf.
#[derive(Debug, Clone)]
pub struct ResolvedChain {
    components: Vec<ComponentRef>,
    leaf_name: String,
    leaf_path: String,
}

impl ResolvedChain {
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn leaf_name(&self) -> &str {
        &self.leaf_name
    }

    pub fn leaf_path(&self) -> &str {
        &self.leaf_path
    }
}

impl RouteTable {
    /// Resolve a normalized path to its root-to-leaf component chain.
    ///
    /// Expects a leading `/` and no trailing slash except for `/` itself
    /// (see [`normalize_path`]). Matching is an exact literal comparison
    /// over a left-to-right, depth-first scan below the root; the first
    /// match wins. The table carries no overlapping paths today, but the
    /// scan order is part of the contract so pattern routes can be added
    /// without changing observable behavior.
    pub fn resolve(&self, path: &str) -> Result<ResolvedChain, ResolveError> {
        let mut chain = vec![self.root().component().clone()];
        match scan(self.root().children(), path, &mut chain) {
            Some((name, matched)) => Ok(ResolvedChain {
                components: chain,
                leaf_name: name,
                leaf_path: matched,
            }),
            None => Err(ResolveError::NoMatch(path.to_string())),
        }
    }

    /// Reverse lookup: the literal path registered under `name`.
    pub fn resolve_by_name(&self, name: &str) -> Result<&str, ResolveError> {
        self.names()
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}

fn scan(routes: &[Route], path: &str, chain: &mut Vec<ComponentRef>) -> Option<(String, String)> {
    for route in routes {
        chain.push(route.component().clone());
        if route.path() == path {
            return Some((route.name().to_string(), route.path().to_string()));
        }
        if let Some(found) = scan(route.children(), path, chain) {
            return Some(found);
        }
        chain.pop();
    }
    None
}

/// Normalize raw navigation input to the resolver's expected shape.
///
/// Strips a hash-fragment prefix (`#/foo`), guarantees a leading `/`,
/// and drops trailing slashes except for the root path itself.
pub fn normalize_path(raw: &str) -> String {
    let s = raw.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let mut path = if s.starts_with('/') {
        s.to_string()
    } else {
        format!("/{s}")
    };

    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

impl PartialEq for ResolvedChain {
    fn eq(&self, other: &Self) -> bool {
        self.leaf_name == other.leaf_name
            && self.leaf_path == other.leaf_path
            && self.components.len() == other.components.len()
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(a, b)| a.id() == b.id())
    }
}
