//! Pizza service — read-only use-cases for the pizza catalog.

use slicehub_domain::error::SliceHubError;
use slicehub_domain::pizza::Pizza;

use crate::ports::PizzaRepository;

/// Application service for pizza read operations.
///
/// Pizzas enter the store through seeding only, so there is no create,
/// update, or delete use-case here.
pub struct PizzaService<R> {
    repo: R,
}

impl<R: PizzaRepository> PizzaService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all pizzas.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, SliceHubError> {
        self.repo.get_all().await
    }
}
