//! JSON REST handlers for restaurants.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use slicehub_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use slicehub_domain::id::RestaurantId;
use slicehub_domain::restaurant::{Restaurant, RestaurantDetail};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Restaurant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RestaurantDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /restaurants`
pub async fn list<RR, PR, RPR>(
    State(state): State<AppState<RR, PR, RPR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /restaurants/:id`
pub async fn get<RR, PR, RPR>(
    State(state): State<AppState<RR, PR, RPR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let detail = state
        .restaurant_service
        .get_restaurant(RestaurantId::from_i64(id))
        .await?;
    Ok(GetResponse::Ok(Json(detail)))
}

/// `DELETE /restaurants/:id`
pub async fn delete<RR, PR, RPR>(
    State(state): State<AppState<RR, PR, RPR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    state
        .restaurant_service
        .delete_restaurant(RestaurantId::from_i64(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}
