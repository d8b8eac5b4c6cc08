//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use slicehub_app::ports::RestaurantRepository;
use slicehub_domain::error::SliceHubError;
use slicehub_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use slicehub_domain::pizza::Pizza;
use slicehub_domain::restaurant::{Restaurant, RestaurantDetail};
use slicehub_domain::restaurant_pizza::{RestaurantPizza, RestaurantPizzaWithPizza};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Restaurant`].
struct Wrapper(Restaurant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Restaurant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let address: String = row.try_get("address")?;

        Ok(Self(Restaurant {
            id: RestaurantId::from_i64(id),
            name,
            address,
        }))
    }
}

/// Wrapper for the menu join rows (association plus its pizza).
struct MenuRow(RestaurantPizzaWithPizza);

impl<'r> FromRow<'r, SqliteRow> for MenuRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let price: i64 = row.try_get("price")?;
        let restaurant_id: i64 = row.try_get("restaurant_id")?;
        let pizza_id: i64 = row.try_get("pizza_id")?;
        let pizza_name: String = row.try_get("pizza_name")?;
        let pizza_ingredients: String = row.try_get("pizza_ingredients")?;

        Ok(Self(RestaurantPizzaWithPizza {
            restaurant_pizza: RestaurantPizza {
                id: RestaurantPizzaId::from_i64(id),
                price,
                restaurant_id: RestaurantId::from_i64(restaurant_id),
                pizza_id: PizzaId::from_i64(pizza_id),
            },
            pizza: Pizza {
                id: PizzaId::from_i64(pizza_id),
                name: pizza_name,
                ingredients: pizza_ingredients,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO restaurants (name, address) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, address FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, address FROM restaurants ORDER BY id";
const SELECT_MENU: &str = "\
    SELECT rp.id, rp.price, rp.restaurant_id, rp.pizza_id, \
           p.name AS pizza_name, p.ingredients AS pizza_ingredients \
    FROM restaurant_pizzas rp \
    JOIN pizzas p ON p.id = rp.pizza_id \
    WHERE rp.restaurant_id = ? \
    ORDER BY rp.id";
const DELETE_MENU: &str = "DELETE FROM restaurant_pizzas WHERE restaurant_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ?";

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a restaurant row. Restaurants have no create endpoint, so this
    /// is only reachable through seeding.
    ///
    /// # Errors
    ///
    /// Returns [`SliceHubError::Storage`] when the insert fails.
    pub async fn insert(&self, name: &str, address: &str) -> Result<Restaurant, SliceHubError> {
        let result = sqlx::query(INSERT)
            .bind(name)
            .bind(address)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Restaurant {
            id: RestaurantId::from_i64(result.last_insert_rowid()),
            name: name.to_string(),
            address: address.to_string(),
        })
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, SliceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, SliceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_detail(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<RestaurantDetail>, SliceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let Some(Wrapper(restaurant)) = row else {
                return Ok(None);
            };

            let menu: Vec<MenuRow> = sqlx::query_as(SELECT_MENU)
                .bind(id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Some(RestaurantDetail {
                restaurant,
                restaurant_pizzas: menu.into_iter().map(|w| w.0).collect(),
            }))
        }
    }

    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<bool, SliceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Explicit cascade: association rows and the restaurant row go
            // in the same transaction, all-or-nothing.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(DELETE_MENU)
                .bind(id.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
