//! # slicehubd — slicehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve, with ctrl-c graceful shutdown
//! - `slicehubd seed` populates sample catalog data and exits (restaurants
//!   and pizzas have no create endpoints, so seeding is how rows get in)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use slicehub_adapter_http_axum::state::AppState;
use slicehub_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, Database, SqlitePizzaRepository, SqliteRestaurantPizzaRepository,
    SqliteRestaurantRepository,
};
use slicehub_app::ports::RestaurantPizzaRepository;
use slicehub_app::services::pizza_service::PizzaService;
use slicehub_app::services::restaurant_pizza_service::RestaurantPizzaService;
use slicehub_app::services::restaurant_service::RestaurantService;
use slicehub_domain::restaurant_pizza::NewRestaurantPizza;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    if std::env::args().nth(1).as_deref() == Some("seed") {
        seed(&db).await?;
        return Ok(());
    }

    let pool = db.pool().clone();

    // Services (each with its own repository handle onto the shared pool)
    let restaurant_service =
        RestaurantService::new(SqliteRestaurantRepository::new(pool.clone()));
    let pizza_service = PizzaService::new(SqlitePizzaRepository::new(pool.clone()));
    let restaurant_pizza_service = RestaurantPizzaService::new(
        SqliteRestaurantPizzaRepository::new(pool.clone()),
        SqliteRestaurantRepository::new(pool.clone()),
        SqlitePizzaRepository::new(pool),
    );

    // HTTP
    let state = AppState::new(restaurant_service, pizza_service, restaurant_pizza_service);
    let app = slicehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "slicehubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}

/// Populate the catalog with sample rows, mirroring the project's original
/// seed data.
async fn seed(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let pool = db.pool().clone();
    let restaurants = SqliteRestaurantRepository::new(pool.clone());
    let pizzas = SqlitePizzaRepository::new(pool.clone());
    let links = SqliteRestaurantPizzaRepository::new(pool);

    let shack = restaurants
        .insert("Karen's Pizza Shack", "address1")
        .await?;
    let sanjay = restaurants.insert("Sanjay's Pizza", "address2").await?;
    let kiki = restaurants.insert("Kiki's Pizza", "address3").await?;

    let emma = pizzas.insert("Emma", "Dough, Tomato Sauce, Cheese").await?;
    let geri = pizzas
        .insert("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni")
        .await?;
    let melanie = pizzas.insert("Melanie", "Dough, Sauce, Ricotta").await?;

    for (restaurant, pizza, price) in [
        (&shack, &emma, 1),
        (&sanjay, &geri, 10),
        (&kiki, &melanie, 5),
    ] {
        links
            .create(NewRestaurantPizza::new(restaurant.id, pizza.id, price)?)
            .await?;
    }

    tracing::info!("seeded 3 restaurants, 3 pizzas, 3 associations");
    Ok(())
}
