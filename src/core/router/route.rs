use std::collections::{HashMap, HashSet};

use crate::core::component::ComponentRef;
use crate::errors::RouteTableError;

/// A binding from a URL path to a renderable component, with optional
/// ordered children.
#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    name: String,
    component: ComponentRef,
    children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: ComponentRef) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
            children: Vec::new(),
        }
    }

    /// Attach ordered child routes. Order is the resolver's scan order.
    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn children(&self) -> &[Route] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable route tree plus a global name index.
///
/// Built once at startup by the application's composition point and
/// consulted read-only on every navigation event. Validation happens
/// here, at construction, so resolution can assume a well-formed tree.
#[derive(Debug, Clone)]
pub struct RouteTable {
    root: Route,
    names: HashMap<String, String>,
}

impl RouteTable {
    /// Validate the tree and build the name index.
    ///
    /// Rejects duplicate names anywhere in the tree, duplicate paths
    /// among siblings, a root whose path is not `/`, and a root without
    /// exactly one `/` child (the default route).
    pub fn new(root: Route) -> Result<Self, RouteTableError> {
        if root.path != "/" {
            return Err(RouteTableError::BadRoot(root.path.clone()));
        }

        let defaults = root.children.iter().filter(|r| r.path == "/").count();
        if defaults == 0 {
            return Err(RouteTableError::MissingDefaultRoute);
        }
        if defaults > 1 {
            return Err(RouteTableError::DuplicateSiblingPath {
                parent: root.path.clone(),
                path: "/".to_string(),
            });
        }

        let mut names = HashMap::new();
        index_names(&root, &mut names)?;
        check_sibling_paths(&root)?;

        Ok(Self { root, names })
    }

    pub fn root(&self) -> &Route {
        &self.root
    }

    /// Path of the default route (the root's `/` child).
    pub fn default_path(&self) -> &str {
        "/"
    }

    pub(crate) fn names(&self) -> &HashMap<String, String> {
        &self.names
    }
}

fn index_names(route: &Route, names: &mut HashMap<String, String>) -> Result<(), RouteTableError> {
    if names
        .insert(route.name.clone(), route.path.clone())
        .is_some()
    {
        return Err(RouteTableError::DuplicateName(route.name.clone()));
    }
    for child in &route.children {
        index_names(child, names)?;
    }
    Ok(())
}

fn check_sibling_paths(route: &Route) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();
    for child in &route.children {
        if !seen.insert(child.path.as_str()) {
            return Err(RouteTableError::DuplicateSiblingPath {
                parent: route.path.clone(),
                path: child.path.clone(),
            });
        }
        check_sibling_paths(child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::{Component, ComponentLoader};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Stub(&'static str);

    impl Component for Stub {
        fn id(&self) -> &str {
            self.0
        }
    }

    struct StubLoader(&'static str);

    #[async_trait]
    impl ComponentLoader for StubLoader {
        async fn load(&self) -> anyhow::Result<Arc<dyn Component>> {
            Ok(Arc::new(Stub(self.0)))
        }
    }

    fn r(path: &str, name: &'static str) -> Route {
        Route::new(path, name, ComponentRef::new(name, StubLoader(name)))
    }

    #[test]
    fn builds_with_unique_names_and_paths() {
        let table = RouteTable::new(r("/", "shell").with_children(vec![
            r("/", "home"),
            r("/about", "about"),
        ]))
        .expect("table should validate");

        assert_eq!(table.root().children().len(), 2);
        assert_eq!(table.names().len(), 3);
    }

    #[test]
    fn rejects_duplicate_name() {
        let err = RouteTable::new(r("/", "shell").with_children(vec![
            r("/", "home"),
            r("/other", "home"),
        ]))
        .expect_err("duplicate name must fail");

        assert_eq!(err, RouteTableError::DuplicateName("home".to_string()));
    }

    #[test]
    fn rejects_duplicate_sibling_path() {
        let err = RouteTable::new(r("/", "shell").with_children(vec![
            r("/", "home"),
            r("/about", "about"),
            r("/about", "about2"),
        ]))
        .expect_err("duplicate sibling path must fail");

        assert_eq!(
            err,
            RouteTableError::DuplicateSiblingPath {
                parent: "/".to_string(),
                path: "/about".to_string(),
            }
        );
    }

    #[test]
    fn rejects_non_slash_root() {
        let err = RouteTable::new(r("/app", "shell")).expect_err("bad root must fail");
        assert_eq!(err, RouteTableError::BadRoot("/app".to_string()));
    }

    #[test]
    fn rejects_missing_default_child() {
        let err = RouteTable::new(r("/", "shell").with_children(vec![r("/about", "about")]))
            .expect_err("missing default route must fail");
        assert_eq!(err, RouteTableError::MissingDefaultRoute);
    }
}
