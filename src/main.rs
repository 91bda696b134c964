//! Filmotek Server - Film Catalog Management System
//!
//! A Rust REST API server for film catalog management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filmotek_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("filmotek_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Filmotek Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.recommendation.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Movies
        .route("/movie/movies/:page_number/:page_size", get(api::movies::list_movies))
        .route("/movie/years", get(api::movies::get_movie_years))
        .route("/movie/trending", get(api::movies::get_trending_movies))
        .route("/movie/byYear/:year", get(api::movies::get_movies_by_year))
        .route("/movie/byGenreName/:name", get(api::movies::get_movies_by_genre_name))
        .route("/movie/byDirectorName/:name", get(api::movies::get_movies_by_director_name))
        .route("/movie/bestByGenre/:name", get(api::movies::get_best_movies_by_genre))
        .route("/movie/bestByDirector/:name", get(api::movies::get_best_movies_by_director))
        .route("/movie/search/:query", get(api::movies::search_movies))
        .route("/movie/recommendation", get(api::movies::get_recommendation))
        .route("/movie/recommendation/refresh", post(api::movies::refresh_ratings))
        .route("/movie/import", post(api::movies::import_movies))
        .route("/movie", post(api::movies::create_movie))
        .route("/movie/:id", get(api::movies::get_movie))
        .route("/movie/:id", put(api::movies::update_movie))
        .route("/movie/:id", delete(api::movies::delete_movie))
        // Directors
        .route("/director", get(api::directors::list_directors))
        .route("/director", post(api::directors::create_director))
        .route("/director/movie/:movie_id", get(api::directors::get_directors_by_movie))
        .route("/director/:id", get(api::directors::get_director))
        .route("/director/:id", put(api::directors::update_director))
        .route("/director/:id", delete(api::directors::delete_director))
        // Genres
        .route("/genre", get(api::genres::list_genres))
        .route("/genre", post(api::genres::create_genre))
        .route("/genre/movie/:movie_id", get(api::genres::get_genres_by_movie))
        .route("/genre/:id", get(api::genres::get_genre))
        .route("/genre/:id", put(api::genres::update_genre))
        .route("/genre/:id", delete(api::genres::delete_genre))
        // Reviews
        .route("/review", get(api::reviews::list_reviews))
        .route("/review", post(api::reviews::create_review))
        .route("/review/byMovieId/:movie_id", get(api::reviews::get_reviews_by_movie))
        .route("/review/:id", get(api::reviews::get_review))
        .route("/review/:id", put(api::reviews::update_review))
        .route("/review/:id", delete(api::reviews::delete_review))
        .with_state(state.clone());

    // Identity provider redirect flow
    let auth_routes = Router::new()
        .route("/auth/login", get(api::auth::login))
        .route("/auth/callback", get(api::auth::callback))
        .route("/auth/logout", get(api::auth::logout))
        .with_state(state.clone());

    // Health endpoints
    let health_routes = Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(auth_routes)
        .merge(health_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
