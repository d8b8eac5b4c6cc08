//! JSON REST handlers for pizzas.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use slicehub_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use slicehub_domain::pizza::Pizza;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Pizza>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /pizzas`
pub async fn list<RR, PR, RPR>(
    State(state): State<AppState<RR, PR, RPR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let pizzas = state.pizza_service.list_pizzas().await?;
    Ok(ListResponse::Ok(Json(pizzas)))
}
