//! Review endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::review::ReviewDto,
};

use super::AuthenticatedUser;

/// List all reviews
#[utoipa::path(
    get,
    path = "/review",
    tag = "reviews",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reviews list", body = Vec<ReviewDto>)
    )
)]
pub async fn list_reviews(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ReviewDto>>> {
    let reviews = state.services.reviews.list().await?;
    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

/// Get review by ID
#[utoipa::path(
    get,
    path = "/review/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review details", body = ReviewDto),
        (status = 404, description = "Review not found")
    )
)]
pub async fn get_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ReviewDto>> {
    let review = state.services.reviews.get_by_id(id).await?;
    Ok(Json(review.into()))
}

/// List reviews for a movie
#[utoipa::path(
    get,
    path = "/review/byMovieId/{movie_id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("movie_id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Reviews for the movie", body = Vec<ReviewDto>),
        (status = 404, description = "No reviews found for this movie")
    )
)]
pub async fn get_reviews_by_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<Vec<ReviewDto>>> {
    let reviews = state.services.reviews.list_by_movie(movie_id).await?;
    if reviews.is_empty() {
        return Err(AppError::NotFound(
            "No reviews found for this movie".to_string(),
        ));
    }
    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewParams {
    pub movie_id: i32,
}

/// Create a review for a movie
#[utoipa::path(
    post,
    path = "/review",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("movieId" = i32, Query, description = "Movie being reviewed")),
    request_body = ReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid review data"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn create_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(params): Query<CreateReviewParams>,
    Json(data): Json<ReviewDto>,
) -> AppResult<(StatusCode, Json<ReviewDto>)> {
    let created = state
        .services
        .reviews
        .create(params.movie_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace a review's fields
#[utoipa::path(
    put,
    path = "/review/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    request_body = ReviewDto,
    responses(
        (status = 204, description = "Review updated"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn update_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<ReviewDto>,
) -> AppResult<StatusCode> {
    state.services.reviews.update(id, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/review/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
