//! Client resource

use shared::models::Client;

use crate::gateway::ResourceGateway;
use crate::list::ListController;
use crate::resource::{Envelope, ResourceSpec};
use crate::resources::ActiveFilters;

/// The `/client` resource
#[derive(Debug, Clone, Copy)]
pub struct Clients;

impl ResourceSpec for Clients {
    type Record = Client;
    type Filters = ActiveFilters;

    const PATH: &'static str = "/client";
    const ENVELOPE: Envelope = Envelope::Wrapped;

    fn record_id(record: &Client) -> Option<i64> {
        record.id
    }
}

pub type ClientGateway = ResourceGateway<Clients>;
pub type ClientList = ListController<Clients>;
