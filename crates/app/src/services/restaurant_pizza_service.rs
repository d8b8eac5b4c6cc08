//! Restaurant-pizza service — use-cases for the priced association between
//! restaurants and pizzas.

use slicehub_domain::error::{NotFoundError, SliceHubError};
use slicehub_domain::id::{PizzaId, RestaurantId};
use slicehub_domain::restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetail,
};

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

/// Application service for association read and create operations.
///
/// Creation needs the restaurant and pizza repositories as well: both
/// parents must exist before the association is validated and inserted.
pub struct RestaurantPizzaService<RPR, RR, PR> {
    repo: RPR,
    restaurants: RR,
    pizzas: PR,
}

impl<RPR, RR, PR> RestaurantPizzaService<RPR, RR, PR>
where
    RPR: RestaurantPizzaRepository,
    RR: RestaurantRepository,
    PR: PizzaRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: RPR, restaurants: RR, pizzas: PR) -> Self {
        Self {
            repo,
            restaurants,
            pizzas,
        }
    }

    /// List all associations, scalar fields only.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurant_pizzas(&self) -> Result<Vec<RestaurantPizza>, SliceHubError> {
        self.repo.get_all().await
    }

    /// Create an association after checking that both parents exist and the
    /// price invariant holds. Nothing is persisted on any failure path.
    ///
    /// # Errors
    ///
    /// Returns [`SliceHubError::NotFound`] when either parent row is
    /// missing, [`SliceHubError::Validation`] when the price falls outside
    /// the allowed range, or a storage error from the repository.
    pub async fn create_restaurant_pizza(
        &self,
        restaurant_id: RestaurantId,
        pizza_id: PizzaId,
        price: i64,
    ) -> Result<RestaurantPizzaDetail, SliceHubError> {
        let restaurant = self.restaurants.get_by_id(restaurant_id).await?;
        let pizza = self.pizzas.get_by_id(pizza_id).await?;
        let (Some(restaurant), Some(pizza)) = (restaurant, pizza) else {
            return Err(NotFoundError {
                entity: "Restaurant or Pizza",
            }
            .into());
        };

        let link = NewRestaurantPizza::new(restaurant_id, pizza_id, price)?;
        let restaurant_pizza = self.repo.create(link).await?;

        Ok(RestaurantPizzaDetail {
            restaurant_pizza,
            pizza,
            restaurant,
        })
    }
}
