//! `SQLite` implementation of [`PizzaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use slicehub_app::ports::PizzaRepository;
use slicehub_domain::error::SliceHubError;
use slicehub_domain::id::PizzaId;
use slicehub_domain::pizza::Pizza;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Pizza`].
struct Wrapper(Pizza);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Pizza> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let ingredients: String = row.try_get("ingredients")?;

        Ok(Self(Pizza {
            id: PizzaId::from_i64(id),
            name,
            ingredients,
        }))
    }
}

const INSERT: &str = "INSERT INTO pizzas (name, ingredients) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, ingredients FROM pizzas ORDER BY id";

/// `SQLite`-backed pizza repository.
pub struct SqlitePizzaRepository {
    pool: SqlitePool,
}

impl SqlitePizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a pizza row. Pizzas have no create endpoint, so this is only
    /// reachable through seeding.
    ///
    /// # Errors
    ///
    /// Returns [`SliceHubError::Storage`] when the insert fails.
    pub async fn insert(&self, name: &str, ingredients: &str) -> Result<Pizza, SliceHubError> {
        let result = sqlx::query(INSERT)
            .bind(name)
            .bind(ingredients)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Pizza {
            id: PizzaId::from_i64(result.last_insert_rowid()),
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        })
    }
}

impl PizzaRepository for SqlitePizzaRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, SliceHubError>> + Send {
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
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, SliceHubError>> + Send {
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
}
