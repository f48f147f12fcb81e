//! User resource

use shared::models::User;

use crate::gateway::ResourceGateway;
use crate::list::ListController;
use crate::resource::{Envelope, ResourceSpec};
use crate::resources::ActiveFilters;

/// The `/user` resource
#[derive(Debug, Clone, Copy)]
pub struct Users;

impl ResourceSpec for Users {
    type Record = User;
    type Filters = ActiveFilters;

    const PATH: &'static str = "/user";
    const ENVELOPE: Envelope = Envelope::Wrapped;

    fn record_id(record: &User) -> Option<i64> {
        record.id
    }
}

pub type UserGateway = ResourceGateway<Users>;
pub type UserList = ListController<Users>;
