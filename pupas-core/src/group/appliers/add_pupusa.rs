//! AddPupusa applier
//!
//! Upserts by combination: a person holds at most one pupusa per
//! (dough, filling, cheese, size). Adding an existing combination overwrites
//! its quantity and price with the new values; quantities are NOT summed.

use crate::group::traits::{update_person, ActionApplier};
use shared::models::{GroupOrder, NewPupusa};
use shared::util::prefixed_id;

#[derive(Debug, Clone, PartialEq)]
pub struct AddPupusa {
    pub person_id: String,
    pub pupusa: NewPupusa,
}

impl ActionApplier for AddPupusa {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        update_person(state, &self.person_id, |person| {
            let key = self.pupusa.key();
            match person.pupusas.iter_mut().find(|p| p.key() == key) {
                Some(existing) => {
                    existing.quantity = self.pupusa.quantity;
                    existing.price_usd = self.pupusa.price_usd;
                }
                None => {
                    let pupusa = self.pupusa.clone().into_pupusa(prefixed_id("pupusa"));
                    person.pupusas.push(pupusa);
                }
            }
        })
    }
}
