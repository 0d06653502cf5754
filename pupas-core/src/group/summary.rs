//! Read-only projections of a group order
//!
//! Nothing here is stored: every projection is recomputed from the current
//! `GroupOrder`.
//!
//! - Kitchen aggregate: pupusas of ALL people grouped by
//!   (dough, filling, cheese, size) with quantities summed. Maíz sorts before
//!   arroz, then by filling id.
//! - Beverage aggregate: grouped by name, summed, sorted by name.
//! - Totals: subtotal, tip at a preset percentage, total, and a per-person
//!   split where each person's tip share is proportional to their subtotal.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Dough, Filling, GroupOrder, Person, PupusaKey, PupusaSize};
use shared::{OrderError, OrderResult};
use tracing::debug;

use super::display;
use super::money::{self, line_total, to_f64_exact};

/// Tip percentage offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TipPercent {
    #[default]
    None,
    Five,
    Ten,
    Fifteen,
}

impl TipPercent {
    /// Presets offered besides "no tip"
    pub const PRESETS: [TipPercent; 3] = [TipPercent::Five, TipPercent::Ten, TipPercent::Fifteen];

    pub fn from_percent(percent: u32) -> OrderResult<Self> {
        match percent {
            0 => Ok(TipPercent::None),
            5 => Ok(TipPercent::Five),
            10 => Ok(TipPercent::Ten),
            15 => Ok(TipPercent::Fifteen),
            other => Err(OrderError::InvalidTip(other)),
        }
    }

    pub fn percent(&self) -> u32 {
        match self {
            TipPercent::None => 0,
            TipPercent::Five => 5,
            TipPercent::Ten => 10,
            TipPercent::Fifteen => 15,
        }
    }

    /// Tip on a subtotal
    pub fn apply(&self, subtotal: Decimal) -> Decimal {
        subtotal * Decimal::from(self.percent()) / Decimal::ONE_HUNDRED
    }
}

/// Kitchen aggregate row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitchenRow {
    pub dough: Dough,
    pub filling: Filling,
    pub with_cheese: bool,
    pub size: PupusaSize,
    pub quantity: i64,
}

impl KitchenRow {
    fn key(&self) -> PupusaKey {
        PupusaKey {
            dough: self.dough,
            filling: self.filling,
            with_cheese: self.with_cheese,
            size: self.size,
        }
    }

    pub fn label(&self) -> String {
        display::kitchen_label(self.quantity, self.dough, self.filling, self.with_cheese, self.size)
    }
}

/// Beverage aggregate row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeverageRow {
    pub name: String,
    pub quantity: i64,
}

/// Money owed by one person
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonTotals {
    pub person_id: String,
    pub person_name: String,
    pub subtotal: f64,
    pub tip: f64,
    pub total: f64,
}

/// Full summary of a group order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub group_name: String,
    pub kitchen: Vec<KitchenRow>,
    pub beverages: Vec<BeverageRow>,
    pub subtotal: f64,
    pub tip_percent: u32,
    pub tip_amount: f64,
    pub total: f64,
    pub people: Vec<PersonTotals>,
}

/// Pupusas of all people grouped by combination, quantities summed
///
/// Sums are widened to `i64`, so any number of `i32` lines fits.
pub fn kitchen_aggregate(order: &GroupOrder) -> Vec<KitchenRow> {
    let mut rows: Vec<KitchenRow> = Vec::new();

    for pupusa in order.people.iter().flat_map(|p| &p.pupusas) {
        let key = pupusa.key();
        match rows.iter_mut().find(|row| row.key() == key) {
            Some(row) => row.quantity += i64::from(pupusa.quantity),
            None => rows.push(KitchenRow {
                dough: pupusa.dough,
                filling: pupusa.filling,
                with_cheese: pupusa.with_cheese,
                size: pupusa.size,
                quantity: i64::from(pupusa.quantity),
            }),
        }
    }

    // Stable: rows equal on (dough, filling) keep first-appearance order
    rows.sort_by(|a, b| {
        a.dough
            .cmp(&b.dough)
            .then_with(|| a.filling.as_str().cmp(b.filling.as_str()))
    });
    rows
}

/// Beverages of all people grouped by name, quantities summed
pub fn beverage_aggregate(order: &GroupOrder) -> Vec<BeverageRow> {
    let mut rows: Vec<BeverageRow> = Vec::new();

    for beverage in order.people.iter().flat_map(|p| &p.beverages) {
        match rows.iter_mut().find(|row| row.name == beverage.name) {
            Some(row) => row.quantity += i64::from(beverage.quantity),
            None => rows.push(BeverageRow {
                name: beverage.name.clone(),
                quantity: i64::from(beverage.quantity),
            }),
        }
    }

    // Case-insensitive, byte order breaks ties
    rows.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Sum of a person's line totals
pub fn person_subtotal(person: &Person) -> Decimal {
    let pupusas: Decimal = person
        .pupusas
        .iter()
        .map(|p| line_total(p.quantity, p.price_usd))
        .sum();
    let beverages: Decimal = person
        .beverages
        .iter()
        .map(|b| line_total(b.quantity, b.price_usd))
        .sum();
    pupusas + beverages
}

/// Sum of every person's subtotal
pub fn subtotal(order: &GroupOrder) -> Decimal {
    order.people.iter().map(person_subtotal).sum()
}

/// Per-person subtotal, proportional tip share and total
///
/// Shares are not rounded so that they add up to the order's tip.
pub fn person_totals(order: &GroupOrder, tip: TipPercent) -> Vec<PersonTotals> {
    let subtotal = subtotal(order);
    let tip_amount = tip.apply(subtotal);

    order
        .people
        .iter()
        .map(|person| {
            let person_subtotal = person_subtotal(person);
            let person_tip = if subtotal > Decimal::ZERO {
                tip_amount * person_subtotal / subtotal
            } else {
                Decimal::ZERO
            };
            PersonTotals {
                person_id: person.id.clone(),
                person_name: person.name.clone(),
                subtotal: to_f64_exact(person_subtotal),
                tip: to_f64_exact(person_tip),
                total: to_f64_exact(person_subtotal + person_tip),
            }
        })
        .collect()
}

/// Build the whole summary
pub fn summarize(order: &GroupOrder, tip: TipPercent) -> OrderSummary {
    let subtotal = subtotal(order);
    let tip_amount = tip.apply(subtotal);
    let kitchen = kitchen_aggregate(order);
    let beverages = beverage_aggregate(order);

    debug!(
        group = %order.group_name,
        people = order.people.len(),
        kitchen_rows = kitchen.len(),
        beverage_rows = beverages.len(),
        subtotal = %subtotal,
        tip_percent = tip.percent(),
        "[Summary] Group order summarized"
    );

    OrderSummary {
        group_name: order.group_name.clone(),
        kitchen,
        beverages,
        subtotal: to_f64_exact(subtotal),
        tip_percent: tip.percent(),
        tip_amount: to_f64_exact(tip_amount),
        total: to_f64_exact(subtotal + tip_amount),
        people: person_totals(order, tip),
    }
}

impl OrderSummary {
    /// Rounded total for display
    pub fn display_total(&self) -> String {
        money::format_usd(money::to_decimal(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared::models::{Beverage, Pupusa};

    fn pupusa(dough: Dough, filling: Filling, with_cheese: bool, size: PupusaSize, qty: i32, price: f64) -> Pupusa {
        Pupusa {
            id: format!("pupusa-{}-{}", filling.as_str(), qty),
            dough,
            filling,
            with_cheese,
            size,
            quantity: qty,
            price_usd: price,
        }
    }

    fn beverage(name: &str, qty: i32, price: f64) -> Beverage {
        Beverage {
            id: format!("beverage-{}", name),
            name: name.to_string(),
            quantity: qty,
            price_usd: price,
        }
    }

    fn two_people() -> GroupOrder {
        let mut a = Person::new("a", "Ana");
        a.pupusas.push(pupusa(Dough::Maiz, Filling::Frijol, false, PupusaSize::Normal, 2, 1.0));
        let mut b = Person::new("b", "Beto");
        b.pupusas.push(pupusa(Dough::Maiz, Filling::Frijol, false, PupusaSize::Normal, 3, 1.0));
        GroupOrder {
            group_name: "Pareja".to_string(),
            people: vec![a, b],
        }
    }

    #[test]
    fn test_worked_example() {
        let order = two_people();

        let kitchen = kitchen_aggregate(&order);
        assert_eq!(kitchen.len(), 1);
        assert_eq!(kitchen[0].quantity, 5);

        let summary = summarize(&order, TipPercent::Ten);
        assert!(money::money_eq(summary.subtotal, 5.0));
        assert!(money::money_eq(summary.tip_amount, 0.5));
        assert!(money::money_eq(summary.total, 5.5));

        let ana = &summary.people[0];
        let beto = &summary.people[1];
        assert!((ana.tip - 0.20).abs() < 1e-9);
        assert!((beto.tip - 0.30).abs() < 1e-9);
        assert!((ana.total - 2.20).abs() < 1e-9);
        assert!((beto.total - 3.30).abs() < 1e-9);
        assert_eq!(summary.display_total(), "$5.50");
    }

    #[test]
    fn test_kitchen_sort_order() {
        let mut p = Person::new("p", "P");
        p.pupusas.push(pupusa(Dough::Arroz, Filling::Ajo, false, PupusaSize::Normal, 1, 1.0));
        p.pupusas.push(pupusa(Dough::Maiz, Filling::Revueltas, false, PupusaSize::Normal, 1, 1.0));
        p.pupusas.push(pupusa(Dough::Maiz, Filling::Chicharron, false, PupusaSize::Grande, 1, 1.0));
        p.pupusas.push(pupusa(Dough::Maiz, Filling::Chicharron, true, PupusaSize::Grande, 1, 1.0));
        let order = GroupOrder {
            group_name: "g".to_string(),
            people: vec![p],
        };

        let rows = kitchen_aggregate(&order);
        let got: Vec<_> = rows.iter().map(|r| (r.dough, r.filling, r.with_cheese)).collect();
        assert_eq!(
            got,
            vec![
                (Dough::Maiz, Filling::Chicharron, false),
                (Dough::Maiz, Filling::Chicharron, true),
                (Dough::Maiz, Filling::Revueltas, false),
                (Dough::Arroz, Filling::Ajo, false),
            ]
        );
    }

    #[test]
    fn test_kitchen_keeps_sizes_apart() {
        let mut p = Person::new("p", "P");
        p.pupusas.push(pupusa(Dough::Maiz, Filling::Queso, false, PupusaSize::Normal, 2, 1.0));
        p.pupusas.push(pupusa(Dough::Maiz, Filling::Queso, false, PupusaSize::Grande, 4, 1.5));
        let order = GroupOrder {
            group_name: "g".to_string(),
            people: vec![p],
        };
        let rows = kitchen_aggregate(&order);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().map(|r| r.quantity).sum::<i64>(), 6);
    }

    #[test]
    fn test_beverage_aggregate_by_name() {
        let mut a = Person::new("a", "Ana");
        a.beverages.push(beverage("Horchata", 1, 1.5));
        a.beverages.push(beverage("Horchata", 2, 1.5));
        let mut b = Person::new("b", "Beto");
        b.beverages.push(beverage("Cebada", 1, 1.5));
        b.beverages.push(beverage("Horchata", 1, 1.5));
        let order = GroupOrder {
            group_name: "g".to_string(),
            people: vec![a, b],
        };

        let rows = beverage_aggregate(&order);
        assert_eq!(
            rows,
            vec![
                BeverageRow {
                    name: "Cebada".to_string(),
                    quantity: 1
                },
                BeverageRow {
                    name: "Horchata".to_string(),
                    quantity: 4
                },
            ]
        );
    }

    #[test]
    fn test_beverages_sort_ignoring_case() {
        let mut a = Person::new("a", "Ana");
        a.beverages.push(beverage("agua", 1, 1.0));
        a.beverages.push(beverage("Coca-Cola", 1, 1.25));
        a.beverages.push(beverage("Agua", 1, 1.0));
        let order = GroupOrder {
            group_name: "g".to_string(),
            people: vec![a],
        };

        let names: Vec<_> = beverage_aggregate(&order).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Agua", "agua", "Coca-Cola"]);
    }

    #[test]
    fn test_large_quantities_sum_without_overflow() {
        let mut a = Person::new("a", "Ana");
        a.pupusas.push(pupusa(Dough::Maiz, Filling::Frijol, false, PupusaSize::Normal, 1_500_000_000, 0.5));
        a.beverages.push(beverage("Horchata", i32::MAX, 1.0));
        let mut b = Person::new("b", "Beto");
        b.pupusas.push(pupusa(Dough::Maiz, Filling::Frijol, false, PupusaSize::Normal, 1_500_000_000, 0.5));
        b.beverages.push(beverage("Horchata", i32::MAX, 1.0));
        let order = GroupOrder {
            group_name: "g".to_string(),
            people: vec![a, b],
        };

        let kitchen = kitchen_aggregate(&order);
        assert_eq!(kitchen[0].quantity, 3_000_000_000);
        assert!(kitchen[0].label().starts_with("3000000000 de "));
        assert_eq!(beverage_aggregate(&order)[0].quantity, 2 * i64::from(i32::MAX));
        assert_eq!(order.people[0].item_count(), 1_500_000_000 + i64::from(i32::MAX));
    }

    #[test]
    fn test_zero_subtotal_gives_zero_tips() {
        let order = GroupOrder {
            group_name: "g".to_string(),
            people: vec![Person::new("a", "Ana"), Person::new("b", "Beto")],
        };
        let totals = person_totals(&order, TipPercent::Fifteen);
        assert!(totals.iter().all(|t| t.tip == 0.0 && t.total == 0.0));
    }

    #[test]
    fn test_tip_percent_parsing() {
        assert_eq!(TipPercent::from_percent(15), Ok(TipPercent::Fifteen));
        assert_eq!(TipPercent::from_percent(12), Err(OrderError::InvalidTip(12)));
        assert_eq!(TipPercent::PRESETS.map(|t| t.percent()), [5, 10, 15]);
    }

    #[test]
    fn test_person_totals_sum_to_total() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let prices = [0.35, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.25];

        for _ in 0..200 {
            let people = (0..rng.gen_range(1..=20))
                .map(|i| {
                    let mut person = Person::new(format!("p{}", i), format!("Persona {}", i + 1));
                    for _ in 0..rng.gen_range(0..4) {
                        let filling = Filling::ALL[rng.gen_range(0..Filling::ALL.len())];
                        let price = prices[rng.gen_range(0..prices.len())];
                        person.pupusas.push(pupusa(
                            Dough::Maiz,
                            filling,
                            false,
                            PupusaSize::Normal,
                            rng.gen_range(1..10),
                            price,
                        ));
                    }
                    for _ in 0..rng.gen_range(0..3) {
                        let price = prices[rng.gen_range(0..prices.len())];
                        person.beverages.push(beverage("Tamarindo", rng.gen_range(1..4), price));
                    }
                    person
                })
                .collect();
            let order = GroupOrder {
                group_name: "random".to_string(),
                people,
            };

            for tip in [TipPercent::None, TipPercent::Five, TipPercent::Ten, TipPercent::Fifteen] {
                let summary = summarize(&order, tip);
                let sum: f64 = summary.people.iter().map(|p| p.total).sum();
                assert!(
                    (sum - summary.total).abs() < 1e-6,
                    "sum {} != total {} at {}%",
                    sum,
                    summary.total,
                    tip.percent()
                );
            }
        }
    }

    #[test]
    fn test_kitchen_quantity_matches_sum_across_people() {
        let mut rng = StdRng::seed_from_u64(7);
        let fillings = [Filling::Frijol, Filling::Loroco, Filling::Queso];
        let people: Vec<Person> = (0..8)
            .map(|i| {
                let mut person = Person::new(format!("p{}", i), "x");
                for filling in fillings {
                    if rng.gen_bool(0.6) {
                        person.pupusas.push(pupusa(
                            Dough::Maiz,
                            filling,
                            false,
                            PupusaSize::Normal,
                            rng.gen_range(1..6),
                            1.0,
                        ));
                    }
                }
                person
            })
            .collect();
        let order = GroupOrder {
            group_name: "g".to_string(),
            people,
        };

        for row in kitchen_aggregate(&order) {
            let expected: i64 = order
                .people
                .iter()
                .flat_map(|p| &p.pupusas)
                .filter(|p| p.key() == row.key())
                .map(|p| i64::from(p.quantity))
                .sum();
            assert_eq!(row.quantity, expected);
        }
    }
}
