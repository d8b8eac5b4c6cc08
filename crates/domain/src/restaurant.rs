//! Restaurant — a place that sells pizzas from the catalog.

use serde::{Deserialize, Serialize};

use crate::id::RestaurantId;
use crate::restaurant_pizza::RestaurantPizzaWithPizza;

/// A restaurant in the catalog.
///
/// Restaurants are seeded into the store; the API lists, fetches, and
/// deletes them. Deleting a restaurant cascades to every
/// [`RestaurantPizza`](crate::restaurant_pizza::RestaurantPizza) that
/// references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

/// A restaurant together with its menu, as returned by the detail endpoint.
///
/// Embed depth is capped at restaurant → association → pizza: the embedded
/// pizzas are scalar-only and never carry their own association lists back
/// up the chain.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{PizzaId, RestaurantPizzaId};
    use crate::pizza::Pizza;
    use crate::restaurant_pizza::RestaurantPizza;

    fn sample_restaurant() -> Restaurant {
        Restaurant {
            id: RestaurantId::from_i64(1),
            name: "Karen's Pizza Shack".to_string(),
            address: "address1".to_string(),
        }
    }

    #[test]
    fn should_serialize_scalar_fields_only() {
        let value = serde_json::to_value(sample_restaurant()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "address1",
            })
        );
    }

    #[test]
    fn should_embed_menu_without_recursing_into_pizza_associations() {
        let detail = RestaurantDetail {
            restaurant: sample_restaurant(),
            restaurant_pizzas: vec![RestaurantPizzaWithPizza {
                restaurant_pizza: RestaurantPizza {
                    id: RestaurantPizzaId::from_i64(5),
                    price: 12,
                    restaurant_id: RestaurantId::from_i64(1),
                    pizza_id: PizzaId::from_i64(3),
                },
                pizza: Pizza {
                    id: PizzaId::from_i64(3),
                    name: "Geri".to_string(),
                    ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
                },
            }],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["restaurant_pizzas"][0]["price"], 12);
        assert_eq!(value["restaurant_pizzas"][0]["pizza"]["name"], "Geri");
        // The grandchild pizza stays scalar-only.
        assert!(
            value["restaurant_pizzas"][0]["pizza"]
                .get("restaurant_pizzas")
                .is_none()
        );
    }
}
