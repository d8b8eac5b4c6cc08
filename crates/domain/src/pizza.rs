//! Pizza — a catalog entry with its ingredient list.

use serde::{Deserialize, Serialize};

use crate::id::PizzaId;

/// A pizza in the catalog.
///
/// Pizzas are seeded into the store; the API only reads them. They are
/// referenced (never owned) by restaurant associations, so deleting a
/// restaurant leaves its pizzas untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    /// Comma-separated ingredient list, stored as plain text.
    pub ingredients: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_scalar_fields_only() {
        let pizza = Pizza {
            id: PizzaId::from_i64(1),
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        };

        let value = serde_json::to_value(&pizza).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Emma",
                "ingredients": "Dough, Tomato Sauce, Cheese",
            })
        );
    }
}
