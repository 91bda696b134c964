//! Genre model and DTO

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Genre record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Transport shape of a genre
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenreDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

impl From<GenreDto> for Genre {
    fn from(dto: GenreDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
