//! Cargo resource

use shared::models::Cargo;

use crate::gateway::ResourceGateway;
use crate::list::ListController;
use crate::resource::{Envelope, ResourceSpec};
use crate::resources::ActiveFilters;

/// The `/cargo` resource
#[derive(Debug, Clone, Copy)]
pub struct Cargos;

impl ResourceSpec for Cargos {
    type Record = Cargo;
    type Filters = ActiveFilters;

    const PATH: &'static str = "/cargo";
    const ENVELOPE: Envelope = Envelope::Wrapped;

    fn record_id(record: &Cargo) -> Option<i64> {
        record.id
    }
}

pub type CargoGateway = ResourceGateway<Cargos>;
pub type CargoList = ListController<Cargos>;
