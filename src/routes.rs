//! The application's route table.

use crate::core::router::{Route, RouteTable};
use crate::domain::view;
use crate::errors::RouteTableError;

/// Build the main route table.
///
/// Every leaf sits under the layout shell; the dashboard doubles as the
/// default route at `/`. All components load on demand.
pub fn app_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(
        Route::new("/", "layout", view::app_layout()).with_children(vec![
            Route::new("/", "dashboard", view::dashboard()),
            Route::new("/contractform", "contractform", view::contract_form()),
            Route::new("/contractstatus", "contractstatus", view::contract_status()),
            Route::new("/productform", "productform", view::product_form()),
            Route::new("/patientform", "patientform", view::patient_form()),
        ]),
    )
}
