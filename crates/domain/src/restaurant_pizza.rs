//! RestaurantPizza — the priced association between a restaurant and a pizza.

use serde::{Deserialize, Serialize};

use crate::error::{SliceHubError, ValidationError};
use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use crate::pizza::Pizza;
use crate::restaurant::Restaurant;

/// Lowest price a restaurant may charge for a pizza.
pub const PRICE_MIN: i64 = 1;
/// Highest price a restaurant may charge for a pizza.
pub const PRICE_MAX: i64 = 30;

/// A persisted association row linking one restaurant and one pizza.
///
/// The same (restaurant, pizza) pair may appear more than once with
/// different prices — no uniqueness constraint exists on the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub price: i64,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

/// A validated, not-yet-persisted association.
///
/// The only way to obtain one is [`NewRestaurantPizza::new`], so a value of
/// this type always satisfies the price invariant. Handlers inspect the
/// constructor's `Result` directly instead of catching a thrown error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
    pub price: i64,
}

impl NewRestaurantPizza {
    /// Validate the price range and build an insertable association.
    ///
    /// # Errors
    ///
    /// Returns [`SliceHubError::Validation`] when `price` falls outside
    /// `[PRICE_MIN, PRICE_MAX]`.
    pub fn new(
        restaurant_id: RestaurantId,
        pizza_id: PizzaId,
        price: i64,
    ) -> Result<Self, SliceHubError> {
        if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
            return Err(ValidationError::PriceOutOfRange.into());
        }
        Ok(Self {
            restaurant_id,
            pizza_id,
            price,
        })
    }
}

/// An association plus its pizza, embedded in a restaurant's detail view.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPizzaWithPizza {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

/// A freshly created association with both parents embedded, as returned
/// by the create endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPizzaDetail {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}
