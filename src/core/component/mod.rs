use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::errors::ComponentLoadError;

/// Contract satisfied by a page-rendering unit.
///
/// The navigation core only tracks identity; rendering and any internal
/// state belong to the embedding shell.
pub trait Component: Send + Sync {
    /// Stable identifier, unique per unit.
    fn id(&self) -> &str;
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("id", &self.id()).finish()
    }
}

/// Deferred source for a component's backing code.
#[async_trait]
pub trait ComponentLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn Component>>;
}

struct RefInner {
    id: String,
    loader: Box<dyn ComponentLoader>,
    cell: OnceCell<Arc<dyn Component>>,
}

/// Cheap-to-clone handle to a lazily loaded component.
///
/// The loader runs on the first `load()` call, never earlier. A loaded
/// component is cached for the lifetime of the handle; concurrent first
/// loads share a single loader invocation. A failed load is not cached,
/// so a later `load()` retries.
#[derive(Clone)]
pub struct ComponentRef {
    inner: Arc<RefInner>,
}

impl ComponentRef {
    pub fn new(id: impl Into<String>, loader: impl ComponentLoader + 'static) -> Self {
        Self {
            inner: Arc::new(RefInner {
                id: id.into(),
                loader: Box::new(loader),
                cell: OnceCell::new(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Whether the backing component has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.inner.cell.initialized()
    }

    /// Resolve the backing component, loading it on first use.
    ///
    /// Cancellation is the caller's concern: dropping the returned future
    /// on navigation-away abandons the in-flight load.
    pub async fn load(&self) -> Result<Arc<dyn Component>, ComponentLoadError> {
        self.inner
            .cell
            .get_or_try_init(|| self.inner.loader.load())
            .await
            .map(Arc::clone)
            .map_err(|e| ComponentLoadError {
                id: self.inner.id.clone(),
                message: format!("{e:#}"),
            })
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("id", &self.inner.id)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
