//! CreateGroup applier
//!
//! Starts a new group, discarding whatever state existed before.

use crate::group::traits::ActionApplier;
use shared::models::{GroupOrder, Person};

/// Create a group with `people_count` placeholder people
///
/// Blank names are rejected before dispatch; the applier accepts any input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroup {
    pub group_name: String,
    pub people_count: usize,
}

impl ActionApplier for CreateGroup {
    fn apply(&self, _state: Option<GroupOrder>) -> Option<GroupOrder> {
        let people = (1..=self.people_count)
            .map(|n| Person::new(format!("person-{}", n), format!("Persona {}", n)))
            .collect();

        Some(GroupOrder {
            group_name: self.group_name.clone(),
            people,
        })
    }
}
