//! Layout shell and page units the route table binds to.
//!
//! These carry identity only; form handling and rendering live in the
//! embedding shell. Each unit sits behind a deferred loader, so nothing
//! is instantiated until a route actually matches and renders.

use std::marker::PhantomData;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::component::{Component, ComponentLoader, ComponentRef};

/// Deferred loader for a statically linked page unit.
///
/// `load()` is where a code-split build would fetch the unit's chunk;
/// here the unit is linked in and the load completes immediately.
pub struct PageLoader<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<C> PageLoader<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for PageLoader<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C> ComponentLoader for PageLoader<C>
where
    C: Component + Default + 'static,
{
    async fn load(&self) -> Result<Arc<dyn Component>> {
        Ok(Arc::new(C::default()))
    }
}

macro_rules! page_unit {
    ($(#[$doc:meta])* $ty:ident, $id:literal, $ctor:ident) => {
        $(#[$doc])*
        #[derive(Debug, Default)]
        pub struct $ty;

        impl Component for $ty {
            fn id(&self) -> &str {
                $id
            }
        }

        /// Deferred reference to this unit.
        pub fn $ctor() -> ComponentRef {
            ComponentRef::new($id, PageLoader::<$ty>::new())
        }
    };
}

page_unit!(
    /// Persistent chrome wrapping every leaf page.
    AppLayout,
    "app-layout",
    app_layout
);
page_unit!(
    /// Landing page.
    Dashboard,
    "dashboard",
    dashboard
);
page_unit!(ContractForm, "contract-form", contract_form);
page_unit!(ContractStatus, "contract-status", contract_status);
page_unit!(ProductForm, "product-form", product_form);
page_unit!(PatientForm, "patient-form", patient_form);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn units_load_on_demand_with_stable_ids() {
        let rf = product_form();
        assert!(!rf.is_loaded());

        let unit = rf.load().await.expect("load should succeed");
        assert_eq!(unit.id(), "product-form");
    }
}
