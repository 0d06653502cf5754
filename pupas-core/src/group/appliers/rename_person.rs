//! RenamePerson applier

use crate::group::traits::{update_person, ActionApplier};
use shared::models::GroupOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePerson {
    pub person_id: String,
    pub new_name: String,
}

impl ActionApplier for RenamePerson {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        update_person(state, &self.person_id, |person| {
            person.name = self.new_name.clone();
        })
    }
}
