//! Movie model and DTO

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Movie record as persisted
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub description: Option<String>,
    /// Rating on a 0-10 scale, unset until scored
    pub rating: Option<f64>,
}

/// Transport shape of a movie. Carries the id so update requests
/// round-trip without losing it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MovieDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub release_year: i32,
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_year: movie.release_year,
            description: movie.description,
            rating: movie.rating,
        }
    }
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            release_year: dto.release_year,
            description: dto.description,
            rating: dto.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: 7,
            title: "Stalker".to_string(),
            release_year: 1979,
            description: Some("Three men cross the Zone".to_string()),
            rating: Some(8.1),
        }
    }

    #[test]
    fn dto_round_trips_every_field() {
        let movie = sample();
        let dto = MovieDto::from(movie.clone());
        let back = Movie::from(dto);
        assert_eq!(back.id, movie.id);
        assert_eq!(back.title, movie.title);
        assert_eq!(back.release_year, movie.release_year);
        assert_eq!(back.description, movie.description);
        assert_eq!(back.rating, movie.rating);
    }

    #[test]
    fn empty_title_fails_validation() {
        let dto = MovieDto {
            id: 0,
            title: String::new(),
            release_year: 2000,
            description: None,
            rating: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rating_above_ten_fails_validation() {
        let dto = MovieDto {
            id: 0,
            title: "Ran".to_string(),
            release_year: 1985,
            description: None,
            rating: Some(11.0),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn dto_deserializes_without_id() {
        let dto: MovieDto =
            serde_json::from_str(r#"{"title":"Ran","release_year":1985}"#).unwrap();
        assert_eq!(dto.id, 0);
        assert_eq!(dto.title, "Ran");
        assert!(dto.rating.is_none());
    }
}
