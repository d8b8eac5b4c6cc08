//! Restaurant service — use-cases for listing, fetching, and deleting
//! restaurants.

use slicehub_domain::error::{NotFoundError, SliceHubError};
use slicehub_domain::id::RestaurantId;
use slicehub_domain::restaurant::{Restaurant, RestaurantDetail};

use crate::ports::RestaurantRepository;

/// Application service for restaurant read and delete operations.
pub struct RestaurantService<R> {
    repo: R,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all restaurants, scalar fields only.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, SliceHubError> {
        self.repo.get_all().await
    }

    /// Fetch one restaurant with its nested menu.
    ///
    /// # Errors
    ///
    /// Returns [`SliceHubError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_restaurant(
        &self,
        id: RestaurantId,
    ) -> Result<RestaurantDetail, SliceHubError> {
        self.repo.get_detail(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Restaurant",
            }
            .into()
        })
    }

    /// Delete a restaurant and, transitively, all of its associations.
    ///
    /// The repository performs the cascade inside a single transaction, so
    /// either the restaurant and every one of its association rows are gone
    /// or nothing changed.
    ///
    /// # Errors
    ///
    /// Returns [`SliceHubError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repository.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), SliceHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Restaurant",
            }
            .into())
        }
    }
}
