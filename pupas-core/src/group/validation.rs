//! Input validation at the UI boundary
//!
//! These checks run before an action is built. The reducer itself never
//! validates, so anything that gets past here is applied as-is.

use shared::models::{NewBeverage, NewPupusa, MAX_PEOPLE};
use shared::util::is_blank;
use shared::{OrderError, OrderResult};

use super::appliers::GroupAction;

/// Largest quantity accepted on one line
pub const MAX_LINE_QUANTITY: i32 = 999;

#[inline]
fn require_line_quantity(quantity: i32) -> OrderResult<()> {
    if quantity <= 0 {
        return Err(OrderError::InvalidQuantity(quantity));
    }
    if quantity > MAX_LINE_QUANTITY {
        return Err(OrderError::QuantityTooLarge {
            got: quantity,
            max: MAX_LINE_QUANTITY,
        });
    }
    Ok(())
}

#[inline]
fn require_price(price: f64) -> OrderResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(OrderError::InvalidPrice);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> OrderResult<()> {
    if is_blank(name) {
        return Err(OrderError::BlankName);
    }
    Ok(())
}

/// Group creation: non-blank name, 1..=20 people
pub fn validate_new_group(group_name: &str, people_count: usize) -> OrderResult<()> {
    validate_name(group_name)?;
    if people_count == 0 || people_count > MAX_PEOPLE {
        return Err(OrderError::InvalidPeopleCount {
            got: people_count,
            max: MAX_PEOPLE,
        });
    }
    Ok(())
}

pub fn validate_new_pupusa(pupusa: &NewPupusa) -> OrderResult<()> {
    require_line_quantity(pupusa.quantity)?;
    require_price(pupusa.price_usd)
}

pub fn validate_new_beverage(beverage: &NewBeverage) -> OrderResult<()> {
    validate_name(&beverage.name)?;
    require_line_quantity(beverage.quantity)?;
    require_price(beverage.price_usd)
}

/// Check the user input carried by an action
///
/// Actions without input (add person, removals, reset) always pass.
pub fn validate_action(action: &GroupAction) -> OrderResult<()> {
    match action {
        GroupAction::CreateGroup(a) => validate_new_group(&a.group_name, a.people_count),
        GroupAction::UpdateGroup(a) => validate_name(&a.group_name),
        GroupAction::RenamePerson(a) => validate_name(&a.new_name),
        GroupAction::AddPupusa(a) => validate_new_pupusa(&a.pupusa),
        GroupAction::AddBeverage(a) => validate_new_beverage(&a.beverage),
        GroupAction::AddPerson(_)
        | GroupAction::RemovePupusa(_)
        | GroupAction::RemoveBeverage(_)
        | GroupAction::ResetOrder(_) => Ok(()),
    }
}
