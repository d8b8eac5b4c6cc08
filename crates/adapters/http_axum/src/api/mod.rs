//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurant_pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::get;

use slicehub_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the catalog sub-router.
pub fn routes<RR, PR, RPR>() -> Router<AppState<RR, PR, RPR>>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        // Restaurants
        .route("/restaurants", get(restaurants::list::<RR, PR, RPR>))
        .route(
            "/restaurants/{id}",
            get(restaurants::get::<RR, PR, RPR>).delete(restaurants::delete::<RR, PR, RPR>),
        )
        // Pizzas
        .route("/pizzas", get(pizzas::list::<RR, PR, RPR>))
        // Associations
        .route(
            "/restaurant_pizzas",
            get(restaurant_pizzas::list::<RR, PR, RPR>)
                .post(restaurant_pizzas::create::<RR, PR, RPR>),
        )
}
