//! Menu Catalog
//!
//! Fixed menu of the house. Pupusas are `p*`, beverages are `b*`.

use super::table::{MenuCategory, MenuItem};

/// (id, name, price in USD)
const PUPUSAS: &[(&str, &str, f64)] = &[
    ("p1", "Frijol", 1.00),
    ("p2", "Revueltas", 1.25),
    ("p3", "Queso", 1.00),
    ("p4", "Jalapeño", 1.50),
    ("p5", "Chicharrón", 1.25),
    ("p6", "Cochinito", 1.25),
    ("p7", "Chorizo", 1.25),
    ("p8", "Loroco", 1.50),
    ("p9", "Papelillo", 1.50),
    ("p10", "Mora", 1.50),
    ("p11", "Mango", 1.50),
    ("p12", "Camarón", 1.75),
    ("p13", "Pescado", 1.75),
    ("p14", "Ajo", 1.25),
    ("p15", "Jamón", 1.25),
    ("p16", "Pepperoni", 1.50),
    ("p17", "Hongo / Champiñón", 1.50),
    ("p18", "Loca", 1.25),
    ("p19", "Pollo", 1.25),
    ("p20", "Carne", 1.25),
    ("p21", "Ayote", 1.25),
    ("p22", "Piña", 1.50),
    ("p23", "Jocote", 1.50),
    ("p24", "Garrobo", 1.75),
    ("p25", "Cusuco", 1.75),
    ("p26", "Conejo", 1.75),
];

const BEVERAGES: &[(&str, &str, f64)] = &[
    ("b1", "Coca-Cola", 1.50),
    ("b2", "Coca-Cola Light", 1.50),
    ("b3", "Pepsi", 1.50),
    ("b4", "Mirinda", 1.50),
    ("b5", "Fanta Naranja", 1.50),
    ("b6", "Fresca", 1.50),
    ("b7", "Sprite", 1.50),
    ("b8", "7Up", 1.50),
    ("b9", "Kolashampan", 1.50),
    ("b10", "Tropical", 1.50),
    ("b11", "Canada Dry", 1.50),
    ("b12", "Pilsener", 2.00),
    ("b13", "Suprema", 2.00),
    ("b14", "Golden", 2.00),
    ("b15", "Regia", 2.00),
    ("b16", "Corona", 2.50),
    ("b17", "Modelo Especial", 2.50),
    ("b18", "Budweiser", 2.50),
    ("b19", "Michelob Ultra", 2.50),
    ("b20", "Jugo de naranja", 1.75),
    ("b21", "Jugo de piña", 1.75),
    ("b22", "Jugo de mora", 1.75),
    ("b23", "Jugo de tamarindo", 1.75),
    ("b24", "Jugo de maracuyá", 1.75),
    ("b25", "Jugo de mango", 1.75),
    ("b26", "Jugo de guayaba", 1.75),
    ("b27", "Jugo de fresa", 1.75),
    ("b28", "Jugo de limón", 1.75),
    ("b29", "Horchata", 1.50),
    ("b30", "Ensalada", 1.50),
    ("b31", "Cebada", 1.50),
    ("b32", "Tamarindo", 1.50),
    ("b33", "Jamaica", 1.50),
    ("b34", "Chan", 1.50),
    ("b35", "Arrayán", 1.50),
    ("b36", "Licuado de banano", 2.00),
    ("b37", "Licuado de fresa", 2.00),
    ("b38", "Licuado de papaya", 2.00),
    ("b39", "Licuado de mango", 2.00),
    ("b40", "Licuado de piña", 2.00),
    ("b41", "Licuado de zapote", 2.00),
    ("b42", "Licuado de guineo con avena", 2.25),
    ("b43", "Licuado de chocolate", 2.25),
    ("b44", "Café negro", 1.25),
    ("b45", "Café con leche", 1.50),
    ("b46", "Chocolate caliente", 1.75),
    ("b47", "Atole de elote", 1.75),
    ("b48", "Atole de piña", 1.75),
    ("b49", "Atole de maíz tostado", 1.75),
    ("b50", "Agua pura", 0.75),
    ("b51", "Agua embotellada", 1.00),
    ("b52", "Agua con gas", 1.25),
];

fn entries(
    rows: &'static [(&'static str, &'static str, f64)],
    category: MenuCategory,
) -> impl Iterator<Item = MenuItem> {
    rows.iter().map(move |(id, name, price)| MenuItem {
        id: (*id).to_string(),
        name: (*name).to_string(),
        price: *price,
        category,
    })
}

/// Full menu, pupusas first
pub fn menu() -> Vec<MenuItem> {
    entries(PUPUSAS, MenuCategory::Pupusa)
        .chain(entries(BEVERAGES, MenuCategory::Beverage))
        .collect()
}

/// Look up a menu entry by id
pub fn find_menu_item(id: &str) -> Option<MenuItem> {
    menu().into_iter().find(|item| item.id == id)
}

/// Look up a menu entry by its display name
pub fn find_menu_item_by_name(name: &str) -> Option<MenuItem> {
    menu().into_iter().find(|item| item.name == name)
}

/// Beverage names offered to group orders, in menu order
pub fn beverage_names() -> Vec<&'static str> {
    BEVERAGES.iter().map(|(_, name, _)| *name).collect()
}

/// Case-insensitive search by name, optionally restricted to one category
pub fn search_menu(query: &str, category: Option<MenuCategory>) -> Vec<MenuItem> {
    let needle = query.to_lowercase();
    menu()
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect()
}
