//! Movie endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        import::{ImportReport, ImportRequest},
        movie::MovieDto,
    },
    services::recommendation::{Prediction, SweepReport},
};

use super::AuthenticatedUser;

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// List movies page by page, in stable id order
#[utoipa::path(
    get,
    path = "/movie/movies/{page_number}/{page_size}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(
        ("page_number" = i64, Path, description = "1-based page number"),
        ("page_size" = i64, Path, description = "Items per page")
    ),
    responses(
        (status = 200, description = "One page of movies", body = PaginatedResponse<MovieDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_movies(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path((page_number, page_size)): Path<(i64, i64)>,
) -> AppResult<Json<PaginatedResponse<MovieDto>>> {
    let (movies, total) = state
        .services
        .movies
        .list_paged(page_number, page_size)
        .await?;

    Ok(Json(PaginatedResponse {
        items: movies.into_iter().map(MovieDto::from).collect(),
        total,
        page: page_number,
        per_page: page_size,
    }))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/movie/{id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = MovieDto),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn get_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieDto>> {
    let movie = state.services.movies.get_by_id(id).await?;
    Ok(Json(movie.into()))
}

/// List movies released in a year
#[utoipa::path(
    get,
    path = "/movie/byYear/{year}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("year" = i32, Path, description = "Release year")),
    responses(
        (status = 200, description = "Movies for the year", body = Vec<MovieDto>),
        (status = 404, description = "No movies found for this year")
    )
)]
pub async fn get_movies_by_year(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(year): Path<i32>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.list_by_year(year).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(
            "No movies found for this year".to_string(),
        ));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// List movies in a genre, matched by name
#[utoipa::path(
    get,
    path = "/movie/byGenreName/{name}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Genre name")),
    responses(
        (status = 200, description = "Movies in the genre", body = Vec<MovieDto>),
        (status = 404, description = "No movies found for the genre")
    )
)]
pub async fn get_movies_by_genre_name(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.list_by_genre_name(&name).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(format!(
            "No movies found for genre: {}",
            name
        )));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// List movies by a director, matched by name
#[utoipa::path(
    get,
    path = "/movie/byDirectorName/{name}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Director name")),
    responses(
        (status = 200, description = "Movies by the director", body = Vec<MovieDto>),
        (status = 404, description = "No movies found for the director")
    )
)]
pub async fn get_movies_by_director_name(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.list_by_director_name(&name).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(format!(
            "No movies found for director: {}",
            name
        )));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// List all distinct release years, ascending
#[utoipa::path(
    get,
    path = "/movie/years",
    tag = "movies",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Distinct release years", body = Vec<i32>),
        (status = 404, description = "No movie years found")
    )
)]
pub async fn get_movie_years(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<i32>>> {
    let years = state.services.movies.list_years().await?;
    if years.is_empty() {
        return Err(AppError::NotFound("No movie years found".to_string()));
    }
    Ok(Json(years))
}

/// Top 5 movies by rating
#[utoipa::path(
    get,
    path = "/movie/trending",
    tag = "movies",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Trending movies", body = Vec<MovieDto>),
        (status = 404, description = "No trending movies found")
    )
)]
pub async fn get_trending_movies(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.trending().await?;
    if movies.is_empty() {
        return Err(AppError::NotFound("No trending movies found".to_string()));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// Top 5 movies in a genre ranked by rating
#[utoipa::path(
    get,
    path = "/movie/bestByGenre/{name}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Genre name")),
    responses(
        (status = 200, description = "Best movies in the genre", body = Vec<MovieDto>),
        (status = 404, description = "No movies found for the genre")
    )
)]
pub async fn get_best_movies_by_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.best_by_genre(&name).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(format!(
            "No best movies found for genre: {}",
            name
        )));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// Top 5 movies by a director ranked by rating
#[utoipa::path(
    get,
    path = "/movie/bestByDirector/{name}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Director name")),
    responses(
        (status = 200, description = "Best movies by the director", body = Vec<MovieDto>),
        (status = 404, description = "No movies found for the director")
    )
)]
pub async fn get_best_movies_by_director(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.best_by_director(&name).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(format!(
            "No best movies found for director: {}",
            name
        )));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// Search movies by title or director name substring
#[utoipa::path(
    get,
    path = "/movie/search/{query}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("query" = String, Path, description = "Search text")),
    responses(
        (status = 200, description = "Matching movies", body = Vec<MovieDto>),
        (status = 404, description = "No movies matched")
    )
)]
pub async fn search_movies(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(query): Path<String>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.services.movies.search(&query).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(
            "No movies found matching the query".to_string(),
        ));
    }
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationQuery {
    pub user_id: i32,
    pub movie_id: i32,
}

/// Predicted rating for a (user, movie) pair from the scoring service
#[utoipa::path(
    get,
    path = "/movie/recommendation",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(
        ("userId" = i32, Query, description = "User ID"),
        ("movieId" = i32, Query, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Predicted rating", body = Prediction),
        (status = 502, description = "Scoring service unavailable")
    )
)]
pub async fn get_recommendation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<Prediction>> {
    let prediction = state
        .services
        .recommendation
        .get_prediction(query.user_id, query.movie_id)
        .await?;
    Ok(Json(prediction))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRatingsQuery {
    pub user_id: i32,
}

/// Re-score the whole catalog for a user via the scoring service
#[utoipa::path(
    post,
    path = "/movie/recommendation/refresh",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("userId" = i32, Query, description = "User ID")),
    responses(
        (status = 200, description = "Sweep summary", body = SweepReport)
    )
)]
pub async fn refresh_ratings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<RefreshRatingsQuery>,
) -> AppResult<Json<SweepReport>> {
    let report = state
        .services
        .recommendation
        .predict_and_store(query.user_id)
        .await?;
    Ok(Json(report))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieParams {
    pub genre_id: i32,
    pub director_id: i32,
}

/// Create a movie linked to one genre and one director
#[utoipa::path(
    post,
    path = "/movie",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(
        ("genreId" = i32, Query, description = "Genre to link"),
        ("directorId" = i32, Query, description = "Director to link")
    ),
    request_body = MovieDto,
    responses(
        (status = 201, description = "Movie created", body = MovieDto),
        (status = 400, description = "Invalid movie data"),
        (status = 404, description = "Genre or director not found"),
        (status = 409, description = "Movie already exists")
    )
)]
pub async fn create_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(params): Query<CreateMovieParams>,
    Json(data): Json<MovieDto>,
) -> AppResult<(StatusCode, Json<MovieDto>)> {
    let created = state
        .services
        .movies
        .create(&data, params.genre_id, params.director_id)
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace a movie's scalar fields
#[utoipa::path(
    put,
    path = "/movie/{id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = MovieDto,
    responses(
        (status = 200, description = "Movie updated", body = MovieDto),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn update_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<MovieDto>,
) -> AppResult<Json<MovieDto>> {
    let updated = state.services.movies.update(id, &data).await?;
    Ok(Json(updated.into()))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/movie/{id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn delete_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk import spreadsheet-shaped movie rows
#[utoipa::path(
    post,
    path = "/movie/import",
    tag = "movies",
    security(("bearer_auth" = [])),
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Import report", body = ImportReport)
    )
)]
pub async fn import_movies(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<ImportRequest>,
) -> AppResult<Json<ImportReport>> {
    let report = state.services.import.import(&request.rows).await?;
    Ok(Json(report))
}
