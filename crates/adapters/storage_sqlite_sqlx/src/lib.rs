//! # slicehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `slicehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Model the restaurant → association cascade delete as an explicit
//!   transaction
//!
//! ## Dependency rule
//! Depends on `slicehub-app` (for port traits) and `slicehub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod pizza_repo;
pub mod pool;
pub mod restaurant_pizza_repo;
pub mod restaurant_repo;

pub use error::StorageError;
pub use pizza_repo::SqlitePizzaRepository;
pub use pool::{Config, Database};
pub use restaurant_pizza_repo::SqliteRestaurantPizzaRepository;
pub use restaurant_repo::SqliteRestaurantRepository;
