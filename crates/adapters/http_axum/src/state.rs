//! Shared application state for axum handlers.

use std::sync::Arc;

use slicehub_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use slicehub_app::services::pizza_service::PizzaService;
use slicehub_app::services::restaurant_pizza_service::RestaurantPizzaService;
use slicehub_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<RR, PR, RPR> {
    /// Restaurant read/delete service.
    pub restaurant_service: Arc<RestaurantService<RR>>,
    /// Pizza read service.
    pub pizza_service: Arc<PizzaService<PR>>,
    /// Association read/create service.
    pub restaurant_pizza_service: Arc<RestaurantPizzaService<RPR, RR, PR>>,
}

impl<RR, PR, RPR> Clone for AppState<RR, PR, RPR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
            pizza_service: Arc::clone(&self.pizza_service),
            restaurant_pizza_service: Arc::clone(&self.restaurant_pizza_service),
        }
    }
}

impl<RR, PR, RPR> AppState<RR, PR, RPR>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        restaurant_service: RestaurantService<RR>,
        pizza_service: PizzaService<PR>,
        restaurant_pizza_service: RestaurantPizzaService<RPR, RR, PR>,
    ) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
            pizza_service: Arc::new(pizza_service),
            restaurant_pizza_service: Arc::new(restaurant_pizza_service),
        }
    }
}
