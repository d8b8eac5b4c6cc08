//! Axum router assembly.

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use slicehub_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the welcome page at `/`, a liveness probe at `/health`, and the
/// catalog API at the root. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR, PR, RPR>(state: AppState<RR, PR, RPR>) -> Router
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    RPR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html("<h1>Welcome to the Pizza Restaurant API</h1>")
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use slicehub_app::services::pizza_service::PizzaService;
    use slicehub_app::services::restaurant_pizza_service::RestaurantPizzaService;
    use slicehub_app::services::restaurant_service::RestaurantService;
    use slicehub_domain::error::SliceHubError;
    use slicehub_domain::id::{PizzaId, RestaurantId};
    use slicehub_domain::pizza::Pizza;
    use slicehub_domain::restaurant::{Restaurant, RestaurantDetail};
    use slicehub_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};
    use tower::ServiceExt;

    struct StubRestaurantRepo;
    struct StubPizzaRepo;
    struct StubRestaurantPizzaRepo;

    impl RestaurantRepository for StubRestaurantRepo {
        async fn get_all(&self) -> Result<Vec<Restaurant>, SliceHubError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: RestaurantId) -> Result<Option<Restaurant>, SliceHubError> {
            Ok(None)
        }
        async fn get_detail(
            &self,
            _id: RestaurantId,
        ) -> Result<Option<RestaurantDetail>, SliceHubError> {
            Ok(None)
        }
        async fn delete(&self, _id: RestaurantId) -> Result<bool, SliceHubError> {
            Ok(false)
        }
    }

    impl PizzaRepository for StubPizzaRepo {
        async fn get_all(&self) -> Result<Vec<Pizza>, SliceHubError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: PizzaId) -> Result<Option<Pizza>, SliceHubError> {
            Ok(None)
        }
    }

    impl RestaurantPizzaRepository for StubRestaurantPizzaRepo {
        async fn get_all(&self) -> Result<Vec<RestaurantPizza>, SliceHubError> {
            Ok(vec![])
        }
        async fn create(
            &self,
            _link: NewRestaurantPizza,
        ) -> Result<RestaurantPizza, SliceHubError> {
            unreachable!("stub repo never persists")
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            RestaurantService::new(StubRestaurantRepo),
            PizzaService::new(StubPizzaRepo),
            RestaurantPizzaService::new(StubRestaurantPizzaRepo, StubRestaurantRepo, StubPizzaRepo),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_welcome_page_at_root() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Welcome to the Pizza Restaurant API"));
    }

    #[tokio::test]
    async fn should_return_not_found_body_for_missing_restaurant() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/restaurants/999999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body, serde_json::json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn should_answer_missing_fields_before_touching_repositories() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/restaurant_pizzas")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"restaurant_id": 1, "pizza_id": 2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"errors": ["Missing required fields"]})
        );
    }
}
