//! Group order: reducer, projections and session persistence
//!
//! Customers build one group order per session. The state is changed only
//! through `GroupAction`s run by the reducer; everything shown to the user
//! (kitchen list, beverages, totals, per-person split) is derived on read.

pub mod traits;

pub mod appliers;
pub mod convert;
pub mod display;
pub mod money;
pub mod reducer;
pub mod session;
pub mod summary;
pub mod validation;

pub use appliers::{
    AddBeverage, AddPerson, AddPupusa, CreateGroup, GroupAction, RemoveBeverage, RemovePupusa,
    RenamePerson, ResetOrder, UpdateGroup,
};
pub use convert::to_table_order;
pub use reducer::reduce;
pub use session::GroupOrderSession;
pub use summary::{
    beverage_aggregate, kitchen_aggregate, summarize, BeverageRow, KitchenRow, OrderSummary,
    PersonTotals, TipPercent,
};
pub use traits::ActionApplier;
