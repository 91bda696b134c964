//! Director endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::director::DirectorDto,
};

use super::AuthenticatedUser;

/// List all directors. Restricted to administrators.
#[utoipa::path(
    get,
    path = "/director",
    tag = "directors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Directors list", body = Vec<DirectorDto>),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn list_directors(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<DirectorDto>>> {
    claims.require_admin()?;
    let directors = state.services.directors.list().await?;
    Ok(Json(directors.into_iter().map(DirectorDto::from).collect()))
}

/// Get director by ID
#[utoipa::path(
    get,
    path = "/director/{id}",
    tag = "directors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Director ID")),
    responses(
        (status = 200, description = "Director details", body = DirectorDto),
        (status = 404, description = "Director not found")
    )
)]
pub async fn get_director(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<DirectorDto>> {
    let director = state.services.directors.get_by_id(id).await?;
    Ok(Json(director.into()))
}

/// List directors linked to a movie
#[utoipa::path(
    get,
    path = "/director/movie/{movie_id}",
    tag = "directors",
    security(("bearer_auth" = [])),
    params(("movie_id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Directors for the movie", body = Vec<DirectorDto>),
        (status = 404, description = "No directors found for the movie")
    )
)]
pub async fn get_directors_by_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<Vec<DirectorDto>>> {
    let directors = state.services.directors.list_by_movie(movie_id).await?;
    if directors.is_empty() {
        return Err(AppError::NotFound(
            "No directors found for the movie".to_string(),
        ));
    }
    Ok(Json(directors.into_iter().map(DirectorDto::from).collect()))
}

/// Create a director
#[utoipa::path(
    post,
    path = "/director",
    tag = "directors",
    security(("bearer_auth" = [])),
    request_body = DirectorDto,
    responses(
        (status = 201, description = "Director created", body = DirectorDto),
        (status = 400, description = "Invalid director data"),
        (status = 409, description = "Director already exists")
    )
)]
pub async fn create_director(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<DirectorDto>,
) -> AppResult<(StatusCode, Json<DirectorDto>)> {
    let created = state.services.directors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace a director's fields
#[utoipa::path(
    put,
    path = "/director/{id}",
    tag = "directors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Director ID")),
    request_body = DirectorDto,
    responses(
        (status = 200, description = "Director updated", body = DirectorDto),
        (status = 404, description = "Director not found")
    )
)]
pub async fn update_director(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<DirectorDto>,
) -> AppResult<Json<DirectorDto>> {
    let updated = state.services.directors.update(id, &data).await?;
    Ok(Json(updated.into()))
}

/// Delete a director
#[utoipa::path(
    delete,
    path = "/director/{id}",
    tag = "directors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Director ID")),
    responses(
        (status = 204, description = "Director deleted"),
        (status = 404, description = "Director not found")
    )
)]
pub async fn delete_director(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.directors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
