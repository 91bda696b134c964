//! Genre endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::genre::GenreDto,
};

use super::AuthenticatedUser;

/// List all genres
#[utoipa::path(
    get,
    path = "/genre",
    tag = "genres",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Genres list", body = Vec<GenreDto>)
    )
)]
pub async fn list_genres(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<GenreDto>>> {
    let genres = state.services.genres.list().await?;
    Ok(Json(genres.into_iter().map(GenreDto::from).collect()))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/genre/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = GenreDto),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<GenreDto>> {
    let genre = state.services.genres.get_by_id(id).await?;
    Ok(Json(genre.into()))
}

/// List genres linked to a movie
#[utoipa::path(
    get,
    path = "/genre/movie/{movie_id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("movie_id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Genres for the movie", body = Vec<GenreDto>),
        (status = 404, description = "No genres found for the movie")
    )
)]
pub async fn get_genres_by_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<Vec<GenreDto>>> {
    let genres = state.services.genres.list_by_movie(movie_id).await?;
    if genres.is_empty() {
        return Err(AppError::NotFound(
            "No genres found for the movie".to_string(),
        ));
    }
    Ok(Json(genres.into_iter().map(GenreDto::from).collect()))
}

/// Create a genre
#[utoipa::path(
    post,
    path = "/genre",
    tag = "genres",
    security(("bearer_auth" = [])),
    request_body = GenreDto,
    responses(
        (status = 201, description = "Genre created", body = GenreDto),
        (status = 400, description = "Invalid genre data"),
        (status = 409, description = "Genre already exists")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<GenreDto>,
) -> AppResult<(StatusCode, Json<GenreDto>)> {
    let created = state.services.genres.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace a genre's fields
#[utoipa::path(
    put,
    path = "/genre/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre updated", body = GenreDto),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<GenreDto>,
) -> AppResult<Json<GenreDto>> {
    let updated = state.services.genres.update(id, &data).await?;
    Ok(Json(updated.into()))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/genre/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.genres.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
