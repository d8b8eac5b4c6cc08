//! Storage port — repository traits for persistence.

use std::future::Future;

use slicehub_domain::error::SliceHubError;
use slicehub_domain::id::{PizzaId, RestaurantId};
use slicehub_domain::pizza::Pizza;
use slicehub_domain::restaurant::{Restaurant, RestaurantDetail};
use slicehub_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

/// Persistence operations for restaurants.
pub trait RestaurantRepository {
    /// All restaurants, scalar fields only, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, SliceHubError>> + Send;

    /// Look up one restaurant by primary key.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, SliceHubError>> + Send;

    /// Look up one restaurant with its menu (associations joined to pizzas).
    fn get_detail(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<RestaurantDetail>, SliceHubError>> + Send;

    /// Delete a restaurant and every association referencing it, inside one
    /// transaction. Returns whether the restaurant row existed.
    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<bool, SliceHubError>> + Send;
}

/// Persistence operations for pizzas.
pub trait PizzaRepository {
    /// All pizzas, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, SliceHubError>> + Send;

    /// Look up one pizza by primary key.
    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, SliceHubError>> + Send;
}

/// Persistence operations for restaurant-pizza associations.
pub trait RestaurantPizzaRepository {
    /// All associations, scalar fields only, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<RestaurantPizza>, SliceHubError>> + Send;

    /// Insert a validated association and return the persisted row with its
    /// store-assigned id.
    fn create(
        &self,
        link: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, SliceHubError>> + Send;
}
