//! Group Order Model
//!
//! A group order is a tree of people, each with their own pupusas and
//! beverages. The JSON field names are kept stable because the whole tree is
//! persisted as one blob.

use serde::{Deserialize, Serialize};

/// Maximum number of people in one group
pub const MAX_PEOPLE: usize = 20;

/// Dough (base type) of a pupusa
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Dough {
    /// Corn dough, listed first in the kitchen summary
    Maiz,
    /// Rice dough
    Arroz,
}

impl Dough {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dough::Maiz => "maiz",
            Dough::Arroz => "arroz",
        }
    }
}

/// Pupusa size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PupusaSize {
    Pequena,
    #[default]
    Normal,
    Grande,
}

impl PupusaSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PupusaSize::Pequena => "pequena",
            PupusaSize::Normal => "normal",
            PupusaSize::Grande => "grande",
        }
    }
}

/// Pupusa filling
///
/// Variant order matches the order the fillings are offered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Filling {
    Frijol,
    /// Pork, bean and cheese
    Revueltas,
    /// Cheese only
    Queso,
    Jalapeno,
    Chicharron,
    Cochinito,
    Chorizo,
    Loroco,
    Papelillo,
    Mora,
    Mango,
    Camaron,
    Pescado,
    Ajo,
    Jamon,
    Pepperoni,
    Hongo,
    /// Mixed filling, already carries cheese
    Loca,
    Pollo,
    Carne,
    Ayote,
    Pina,
    Jocote,
    Garrobo,
    Cusuco,
    Conejo,
}

impl Filling {
    pub const ALL: [Filling; 26] = [
        Filling::Frijol,
        Filling::Revueltas,
        Filling::Queso,
        Filling::Jalapeno,
        Filling::Chicharron,
        Filling::Cochinito,
        Filling::Chorizo,
        Filling::Loroco,
        Filling::Papelillo,
        Filling::Mora,
        Filling::Mango,
        Filling::Camaron,
        Filling::Pescado,
        Filling::Ajo,
        Filling::Jamon,
        Filling::Pepperoni,
        Filling::Hongo,
        Filling::Loca,
        Filling::Pollo,
        Filling::Carne,
        Filling::Ayote,
        Filling::Pina,
        Filling::Jocote,
        Filling::Garrobo,
        Filling::Cusuco,
        Filling::Conejo,
    ];

    /// Stable identifier, also the kitchen summary's secondary sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            Filling::Frijol => "frijol",
            Filling::Revueltas => "revueltas",
            Filling::Queso => "queso",
            Filling::Jalapeno => "jalapeno",
            Filling::Chicharron => "chicharron",
            Filling::Cochinito => "cochinito",
            Filling::Chorizo => "chorizo",
            Filling::Loroco => "loroco",
            Filling::Papelillo => "papelillo",
            Filling::Mora => "mora",
            Filling::Mango => "mango",
            Filling::Camaron => "camaron",
            Filling::Pescado => "pescado",
            Filling::Ajo => "ajo",
            Filling::Jamon => "jamon",
            Filling::Pepperoni => "pepperoni",
            Filling::Hongo => "hongo",
            Filling::Loca => "loca",
            Filling::Pollo => "pollo",
            Filling::Carne => "carne",
            Filling::Ayote => "ayote",
            Filling::Pina => "pina",
            Filling::Jocote => "jocote",
            Filling::Garrobo => "garrobo",
            Filling::Cusuco => "cusuco",
            Filling::Conejo => "conejo",
        }
    }

    /// Fillings that already contain cheese and cannot take extra
    pub fn includes_cheese(&self) -> bool {
        matches!(self, Filling::Queso | Filling::Revueltas | Filling::Loca)
    }
}

/// Identity of a pupusa for deduplication and kitchen aggregation
///
/// Two pupusas with the same key are the same item regardless of their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PupusaKey {
    pub dough: Dough,
    pub filling: Filling,
    pub with_cheese: bool,
    pub size: PupusaSize,
}

/// Pupusa line of a person
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pupusa {
    pub id: String,
    pub dough: Dough,
    pub filling: Filling,
    #[serde(rename = "withCheese")]
    pub with_cheese: bool,
    pub size: PupusaSize,
    pub quantity: i32,
    /// Unit price in USD
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

impl Pupusa {
    pub fn key(&self) -> PupusaKey {
        PupusaKey {
            dough: self.dough,
            filling: self.filling,
            with_cheese: self.with_cheese,
            size: self.size,
        }
    }
}

/// Pupusa payload before an id is assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPupusa {
    pub dough: Dough,
    pub filling: Filling,
    #[serde(rename = "withCheese")]
    pub with_cheese: bool,
    pub size: PupusaSize,
    pub quantity: i32,
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

impl NewPupusa {
    pub fn key(&self) -> PupusaKey {
        PupusaKey {
            dough: self.dough,
            filling: self.filling,
            with_cheese: self.with_cheese,
            size: self.size,
        }
    }

    /// Attach a generated id
    pub fn into_pupusa(self, id: String) -> Pupusa {
        Pupusa {
            id,
            dough: self.dough,
            filling: self.filling,
            with_cheese: self.with_cheese,
            size: self.size,
            quantity: self.quantity,
            price_usd: self.price_usd,
        }
    }
}

/// Beverage line of a person
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Beverage {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

/// Beverage payload before an id is assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBeverage {
    pub name: String,
    pub quantity: i32,
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

impl NewBeverage {
    pub fn into_beverage(self, id: String) -> Beverage {
        Beverage {
            id,
            name: self.name,
            quantity: self.quantity,
            price_usd: self.price_usd,
        }
    }
}

/// One diner of the group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pupusas: Vec<Pupusa>,
    #[serde(default)]
    pub beverages: Vec<Beverage>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pupusas: Vec::new(),
            beverages: Vec::new(),
        }
    }

    /// Total units ordered (pupusas + beverages)
    pub fn item_count(&self) -> i64 {
        self.pupusas
            .iter()
            .map(|p| i64::from(p.quantity))
            .chain(self.beverages.iter().map(|b| i64::from(b.quantity)))
            .sum()
    }
}

/// Group order (one per session)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupOrder {
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub people: Vec<Person>,
}

impl GroupOrder {
    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == person_id)
    }

    pub fn is_full(&self) -> bool {
        self.people.len() >= MAX_PEOPLE
    }
}
