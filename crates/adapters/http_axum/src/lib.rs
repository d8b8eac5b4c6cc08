//! # slicehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for the catalog
//!   (`/restaurants`, `/pizzas`, `/restaurant_pizzas`)
//! - Serve the static welcome page at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, including the two JSON
//!   error shapes (`{"error": …}` for restaurant lookups,
//!   `{"errors": […]}` for association creation)
//!
//! ## Dependency rule
//! Depends on `slicehub-app` (for port traits and services) and
//! `slicehub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
