//! Review model and DTO

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Review record, owned by exactly one movie
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: i32,
    pub movie_id: i32,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Transport shape of a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReviewDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub movie_id: i32,
    #[validate(length(min = 1, message = "Reviewer name cannot be empty"))]
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            movie_id: review.movie_id,
            reviewer_name: review.reviewer_name,
            rating: review.rating,
            comment: review.comment,
        }
    }
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Self {
            id: dto.id,
            movie_id: dto.movie_id,
            reviewer_name: dto.reviewer_name,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
