//! Shared in-memory repository fake used by the service tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use slicehub_domain::error::SliceHubError;
use slicehub_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use slicehub_domain::pizza::Pizza;
use slicehub_domain::restaurant::{Restaurant, RestaurantDetail};
use slicehub_domain::restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaWithPizza,
};

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

/// Handle shared between services and the test body.
pub(crate) type SharedCatalog = Arc<InMemoryCatalog>;

/// In-memory stand-in for all three repositories, with sequential ids like
/// the real store.
#[derive(Default)]
pub(crate) struct InMemoryCatalog {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    restaurants: Vec<Restaurant>,
    pizzas: Vec<Pizza>,
    links: Vec<RestaurantPizza>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl InMemoryCatalog {
    pub(crate) fn shared() -> SharedCatalog {
        Arc::new(Self::default())
    }

    pub(crate) fn seed_restaurant(&self, name: &str, address: &str) -> Restaurant {
        let mut inner = self.inner.lock().unwrap();
        let restaurant = Restaurant {
            id: RestaurantId::from_i64(inner.next_id()),
            name: name.to_string(),
            address: address.to_string(),
        };
        inner.restaurants.push(restaurant.clone());
        restaurant
    }

    pub(crate) fn seed_pizza(&self, name: &str, ingredients: &str) -> Pizza {
        let mut inner = self.inner.lock().unwrap();
        let pizza = Pizza {
            id: PizzaId::from_i64(inner.next_id()),
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        };
        inner.pizzas.push(pizza.clone());
        pizza
    }

    pub(crate) fn seed_link(
        &self,
        restaurant_id: RestaurantId,
        pizza_id: PizzaId,
        price: i64,
    ) -> RestaurantPizza {
        let mut inner = self.inner.lock().unwrap();
        let link = RestaurantPizza {
            id: RestaurantPizzaId::from_i64(inner.next_id()),
            price,
            restaurant_id,
            pizza_id,
        };
        inner.links.push(link.clone());
        link
    }

    pub(crate) fn pizzas(&self) -> Vec<Pizza> {
        self.inner.lock().unwrap().pizzas.clone()
    }

    pub(crate) fn links(&self) -> Vec<RestaurantPizza> {
        self.inner.lock().unwrap().links.clone()
    }
}

impl RestaurantRepository for SharedCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, SliceHubError>> + Send {
        let result = self.inner.lock().unwrap().restaurants.clone();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, SliceHubError>> + Send {
        let inner = self.inner.lock().unwrap();
        let result = inner.restaurants.iter().find(|r| r.id == id).cloned();
        async { Ok(result) }
    }

    fn get_detail(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<RestaurantDetail>, SliceHubError>> + Send {
        let inner = self.inner.lock().unwrap();
        let result = inner.restaurants.iter().find(|r| r.id == id).map(|r| {
            let restaurant_pizzas = inner
                .links
                .iter()
                .filter(|link| link.restaurant_id == id)
                .map(|link| RestaurantPizzaWithPizza {
                    restaurant_pizza: link.clone(),
                    pizza: inner
                        .pizzas
                        .iter()
                        .find(|p| p.id == link.pizza_id)
                        .cloned()
                        .unwrap(),
                })
                .collect();
            RestaurantDetail {
                restaurant: r.clone(),
                restaurant_pizzas,
            }
        });
        async { Ok(result) }
    }

    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<bool, SliceHubError>> + Send {
        let mut inner = self.inner.lock().unwrap();
        let existed = inner.restaurants.iter().any(|r| r.id == id);
        inner.links.retain(|link| link.restaurant_id != id);
        inner.restaurants.retain(|r| r.id != id);
        async move { Ok(existed) }
    }
}

impl PizzaRepository for SharedCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, SliceHubError>> + Send {
        let result = self.inner.lock().unwrap().pizzas.clone();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, SliceHubError>> + Send {
        let inner = self.inner.lock().unwrap();
        let result = inner.pizzas.iter().find(|p| p.id == id).cloned();
        async { Ok(result) }
    }
}

impl RestaurantPizzaRepository for SharedCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<RestaurantPizza>, SliceHubError>> + Send {
        let result = self.inner.lock().unwrap().links.clone();
        async { Ok(result) }
    }

    fn create(
        &self,
        link: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, SliceHubError>> + Send {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let row = RestaurantPizza {
            id: RestaurantPizzaId::from_i64(id),
            price: link.price,
            restaurant_id: link.restaurant_id,
            pizza_id: link.pizza_id,
        };
        inner.links.push(row.clone());
        async move { Ok(row) }
    }
}
