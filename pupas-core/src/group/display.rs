//! Display names for group-order items

use shared::models::{Dough, Filling, PupusaSize};

pub fn dough_name(dough: Dough) -> &'static str {
    match dough {
        Dough::Maiz => "Maíz",
        Dough::Arroz => "Arroz",
    }
}

pub fn size_name(size: PupusaSize) -> &'static str {
    match size {
        PupusaSize::Pequena => "Pequeña",
        PupusaSize::Normal => "Normal",
        PupusaSize::Grande => "Grande",
    }
}

fn filling_base_name(filling: Filling) -> &'static str {
    match filling {
        Filling::Frijol => "Frijol",
        Filling::Revueltas => "Revueltas",
        Filling::Queso => "Queso",
        Filling::Jalapeno => "Jalapeño",
        Filling::Chicharron => "Chicharrón",
        Filling::Cochinito => "Cochinito",
        Filling::Chorizo => "Chorizo",
        Filling::Loroco => "Loroco",
        Filling::Papelillo => "Papelillo",
        Filling::Mora => "Mora",
        Filling::Mango => "Mango",
        Filling::Camaron => "Camarón",
        Filling::Pescado => "Pescado",
        Filling::Ajo => "Ajo",
        Filling::Jamon => "Jamón",
        Filling::Pepperoni => "Pepperoni",
        Filling::Hongo => "Hongo / Champiñón",
        Filling::Loca => "Loca",
        Filling::Pollo => "Pollo",
        Filling::Carne => "Carne",
        Filling::Ayote => "Ayote",
        Filling::Pina => "Piña",
        Filling::Jocote => "Jocote",
        Filling::Garrobo => "Garrobo",
        Filling::Cusuco => "Cusuco",
        Filling::Conejo => "Conejo",
    }
}

/// Filling name, with "con queso" when extra cheese applies
pub fn filling_name(filling: Filling, with_cheese: bool) -> String {
    let base = filling_base_name(filling);
    if with_cheese && !filling.includes_cheese() {
        format!("{} con queso", base)
    } else {
        base.to_string()
    }
}

/// `"Loroco con queso de Maíz (Grande)"`
pub fn pupusa_label(dough: Dough, filling: Filling, with_cheese: bool, size: PupusaSize) -> String {
    format!(
        "{} de {} ({})",
        filling_name(filling, with_cheese),
        dough_name(dough),
        size_name(size)
    )
}

/// Kitchen line: `"5 de Frijol de Maíz (Normal)"`
pub fn kitchen_label(quantity: i64, dough: Dough, filling: Filling, with_cheese: bool, size: PupusaSize) -> String {
    format!("{} de {}", quantity, pupusa_label(dough, filling, with_cheese, size))
}
