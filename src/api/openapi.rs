//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, directors, genres, health, movies, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filmotek API",
        version = "1.0.0",
        description = "Film Catalog Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::callback,
        auth::logout,
        // Movies
        movies::list_movies,
        movies::get_movie,
        movies::get_movies_by_year,
        movies::get_movies_by_genre_name,
        movies::get_movies_by_director_name,
        movies::get_movie_years,
        movies::get_trending_movies,
        movies::get_best_movies_by_genre,
        movies::get_best_movies_by_director,
        movies::search_movies,
        movies::get_recommendation,
        movies::refresh_ratings,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        movies::import_movies,
        // Directors
        directors::list_directors,
        directors::get_director,
        directors::get_directors_by_movie,
        directors::create_director,
        directors::update_director,
        directors::delete_director,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::get_genres_by_movie,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        // Reviews
        reviews::list_reviews,
        reviews::get_review,
        reviews::get_reviews_by_movie,
        reviews::create_review,
        reviews::update_review,
        reviews::delete_review,
    ),
    components(
        schemas(
            // Movies
            crate::models::movie::Movie,
            crate::models::movie::MovieDto,
            crate::models::import::ImportRow,
            crate::models::import::ImportRequest,
            crate::models::import::ImportAction,
            crate::models::import::ImportReport,
            // Directors
            crate::models::director::Director,
            crate::models::director::DirectorDto,
            // Genres
            crate::models::genre::Genre,
            crate::models::genre::GenreDto,
            // Reviews
            crate::models::review::Review,
            crate::models::review::ReviewDto,
            // Recommendation
            crate::services::recommendation::Prediction,
            crate::services::recommendation::SweepReport,
            // Auth
            auth::CallbackResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Identity provider redirect flow"),
        (name = "movies", description = "Movie catalog queries and management"),
        (name = "directors", description = "Director management"),
        (name = "genres", description = "Genre management"),
        (name = "reviews", description = "Review management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
