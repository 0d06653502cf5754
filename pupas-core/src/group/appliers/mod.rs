//! Group-order action appliers
//!
//! Each applier implements the `ActionApplier` trait and handles one action
//! type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use super::traits::ActionApplier;
use shared::models::GroupOrder;

mod add_beverage;
mod add_person;
mod add_pupusa;
mod create_group;
mod remove_beverage;
mod remove_pupusa;
mod rename_person;
mod reset_order;
mod update_group;

pub use add_beverage::AddBeverage;
pub use add_person::AddPerson;
pub use add_pupusa::AddPupusa;
pub use create_group::CreateGroup;
pub use remove_beverage::RemoveBeverage;
pub use remove_pupusa::RemovePupusa;
pub use rename_person::RenamePerson;
pub use reset_order::ResetOrder;
pub use update_group::UpdateGroup;

/// GroupAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch; every action struct
/// converts into a `GroupAction` with `.into()`.
#[enum_dispatch(ActionApplier)]
#[derive(Debug, Clone, PartialEq)]
pub enum GroupAction {
    CreateGroup(CreateGroup),
    UpdateGroup(UpdateGroup),
    AddPerson(AddPerson),
    RenamePerson(RenamePerson),
    AddPupusa(AddPupusa),
    RemovePupusa(RemovePupusa),
    AddBeverage(AddBeverage),
    RemoveBeverage(RemoveBeverage),
    ResetOrder(ResetOrder),
}

impl GroupAction {
    /// Action name for logging
    pub fn name(&self) -> &'static str {
        match self {
            GroupAction::CreateGroup(_) => "CREATE_GROUP",
            GroupAction::UpdateGroup(_) => "UPDATE_GROUP",
            GroupAction::AddPerson(_) => "ADD_PERSON",
            GroupAction::RenamePerson(_) => "RENAME_PERSON",
            GroupAction::AddPupusa(_) => "ADD_PUPUSA",
            GroupAction::RemovePupusa(_) => "REMOVE_PUPUSA",
            GroupAction::AddBeverage(_) => "ADD_BEVERAGE",
            GroupAction::RemoveBeverage(_) => "REMOVE_BEVERAGE",
            GroupAction::ResetOrder(_) => "RESET_ORDER",
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use shared::models::{Dough, Filling, GroupOrder, NewBeverage, NewPupusa, Person, PupusaSize};

    pub fn group_of(n: usize) -> GroupOrder {
        GroupOrder {
            group_name: "Mesa del fondo".to_string(),
            people: (1..=n)
                .map(|i| Person::new(format!("person-{}", i), format!("Persona {}", i)))
                .collect(),
        }
    }

    pub fn pupusa(filling: Filling, with_cheese: bool, quantity: i32, price_usd: f64) -> NewPupusa {
        NewPupusa {
            dough: Dough::Maiz,
            filling,
            with_cheese,
            size: PupusaSize::Normal,
            quantity,
            price_usd,
        }
    }

    pub fn beverage(name: &str, quantity: i32, price_usd: f64) -> NewBeverage {
        NewBeverage {
            name: name.to_string(),
            quantity,
            price_usd,
        }
    }
}
