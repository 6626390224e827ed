use thiserror::Error;

/// Failures surfaced by route resolution.
///
/// Both variants are local, recoverable outcomes returned to the
/// navigation-triggering layer; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no route matches path `{0}`")]
    NoMatch(String),

    #[error("no route named `{0}`")]
    NotFound(String),
}

/// Validation failures raised while constructing a route table.
///
/// Construction fails loudly instead of letting a later route silently
/// shadow an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("path `{path}` is declared more than once under `{parent}`")]
    DuplicateSiblingPath { parent: String, path: String },

    #[error("root route must use path `/`, got `{0}`")]
    BadRoot(String),

    #[error("root has no `/` child to act as the default route")]
    MissingDefaultRoute,
}

/// A deferred component loader failed.
#[derive(Debug, Error)]
#[error("component `{id}` failed to load: {message}")]
pub struct ComponentLoadError {
    pub id: String,
    pub message: String,
}
