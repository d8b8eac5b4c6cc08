//! # slicehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RestaurantRepository` — list/get/detail/delete for restaurants
//!   - `PizzaRepository` — list/get for pizzas
//!   - `RestaurantPizzaRepository` — list/create for associations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RestaurantService` — list, fetch with menu, cascade delete
//!   - `PizzaService` — list
//!   - `RestaurantPizzaService` — list, validated create
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `slicehub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
