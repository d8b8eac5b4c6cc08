//! `SQLite` implementation of [`RestaurantPizzaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use slicehub_app::ports::RestaurantPizzaRepository;
use slicehub_domain::error::SliceHubError;
use slicehub_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use slicehub_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`RestaurantPizza`].
struct Wrapper(RestaurantPizza);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let price: i64 = row.try_get("price")?;
        let restaurant_id: i64 = row.try_get("restaurant_id")?;
        let pizza_id: i64 = row.try_get("pizza_id")?;

        Ok(Self(RestaurantPizza {
            id: RestaurantPizzaId::from_i64(id),
            price,
            restaurant_id: RestaurantId::from_i64(restaurant_id),
            pizza_id: PizzaId::from_i64(pizza_id),
        }))
    }
}

const INSERT: &str =
    "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)";
const SELECT_ALL: &str =
    "SELECT id, price, restaurant_id, pizza_id FROM restaurant_pizzas ORDER BY id";

/// `SQLite`-backed association repository.
pub struct SqliteRestaurantPizzaRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantPizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantPizzaRepository for SqliteRestaurantPizzaRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<RestaurantPizza>, SliceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn create(
        &self,
        link: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, SliceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(link.price)
                .bind(link.restaurant_id.as_i64())
                .bind(link.pizza_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(RestaurantPizza {
                id: RestaurantPizzaId::from_i64(result.last_insert_rowid()),
                price: link.price,
                restaurant_id: link.restaurant_id,
                pizza_id: link.pizza_id,
            })
        }
    }
}
