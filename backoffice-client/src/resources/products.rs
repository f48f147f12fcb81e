//! Product resource
//!
//! The one resource whose backend speaks without the `result` wrapper:
//! the page envelope sits at the response root and mutations return the
//! raw record body.

use shared::models::Product;

use crate::gateway::ResourceGateway;
use crate::list::ListController;
use crate::resource::{Envelope, ResourceSpec};
use crate::resources::ActiveFilters;

/// The `/product` resource
#[derive(Debug, Clone, Copy)]
pub struct Products;

impl ResourceSpec for Products {
    type Record = Product;
    type Filters = ActiveFilters;

    const PATH: &'static str = "/product";
    const ENVELOPE: Envelope = Envelope::Bare;

    fn record_id(record: &Product) -> Option<i64> {
        record.id
    }
}

pub type ProductGateway = ResourceGateway<Products>;
pub type ProductList = ListController<Products>;
