//! # slicehub-domain
//!
//! Pure domain model for the slicehub pizza-restaurant catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Restaurants** (places that sell pizzas)
//! - Define **Pizzas** (the catalog of pizzas themselves)
//! - Define **RestaurantPizzas** (the priced association between the two)
//! - Contain all invariant enforcement (price range) and the nested
//!   serialization views returned by the API
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
