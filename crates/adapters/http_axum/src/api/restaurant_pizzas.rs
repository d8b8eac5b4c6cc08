//! JSON REST handlers for restaurant-pizza associations.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use slicehub_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use slicehub_domain::error::{SliceHubError, ValidationError};
use slicehub_domain::id::{PizzaId, RestaurantId};
use slicehub_domain::restaurant_pizza::{RestaurantPizza, RestaurantPizzaDetail};

use crate::error::ApiErrors;
use crate::state::AppState;

/// Request body for creating an association.
///
/// All fields are optional at the schema level so the handler can answer
/// missing fields with the contract's 400 body instead of axum's
/// deserialization rejection.
#[derive(Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    #[serde(default)]
    pub restaurant_id: Option<i64>,
    #[serde(default)]
    pub pizza_id: Option<i64>,
    #[serde(default)]
    pub price: Option<i64>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RestaurantPizza>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<RestaurantPizzaDetail>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /restaurant_pizzas`
pub async fn list<RR, PR, RPR>(
    State(state): State<AppState<RR, PR, RPR>>,
) -> Result<ListResponse, ApiErrors>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let links = state
        .restaurant_pizza_service
        .list_restaurant_pizzas()
        .await?;
    Ok(ListResponse::Ok(Json(links)))
}

/// `POST /restaurant_pizzas`
pub async fn create<RR, PR, RPR>(
    State(state): State<AppState<RR, PR, RPR>>,
    Json(req): Json<CreateRestaurantPizzaRequest>,
) -> Result<CreateResponse, ApiErrors>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    // A zero value is indistinguishable from an absent field under the
    // original API contract, so both answer "Missing required fields".
    let (Some(restaurant_id), Some(pizza_id), Some(price)) = (
        req.restaurant_id.filter(|v| *v != 0),
        req.pizza_id.filter(|v| *v != 0),
        req.price.filter(|v| *v != 0),
    ) else {
        return Err(ApiErrors::from(SliceHubError::from(
            ValidationError::MissingFields,
        )));
    };

    let detail = state
        .restaurant_pizza_service
        .create_restaurant_pizza(
            RestaurantId::from_i64(restaurant_id),
            PizzaId::from_i64(pizza_id),
            price,
        )
        .await?;
    Ok(CreateResponse::Created(Json(detail)))
}
