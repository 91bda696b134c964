//! Recommendation service: client for the external scoring microservice.
//!
//! The upstream is opaque; it either returns a numeric rating for a
//! (user, movie) pair or fails.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    config::RecommendationConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Score returned by the upstream for a (user, movie) pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: f64,
}

/// Summary of a rating sweep over the whole catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SweepReport {
    pub scored: usize,
    pub skipped: usize,
}

#[derive(Clone)]
pub struct RecommendationService {
    repository: Repository,
    client: reqwest::Client,
    config: RecommendationConfig,
}

impl RecommendationService {
    pub fn new(repository: Repository, config: RecommendationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_default();

        Self {
            repository,
            client,
            config,
        }
    }

    /// Fetch the predicted rating for a (user, movie) pair
    pub async fn get_prediction(&self, user_id: i32, movie_id: i32) -> AppResult<Prediction> {
        let url = format!(
            "{}?userId={}&movieId={}",
            self.config.url, user_id, movie_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Recommendation request failed: {}", e);
                AppError::Upstream("Recommendation service unreachable".to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(
                "Recommendation service returned an error".to_string(),
            ));
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|_| AppError::Upstream("Invalid recommendation response".to_string()))
    }

    /// Re-score every movie in the catalog for the given user. Movies the
    /// upstream cannot score keep their current rating.
    pub async fn predict_and_store(&self, user_id: i32) -> AppResult<SweepReport> {
        let movies = self.repository.movies.list_all().await?;

        let mut report = SweepReport {
            scored: 0,
            skipped: 0,
        };

        for movie in movies {
            match self.get_prediction(user_id, movie.id).await {
                Ok(prediction) => {
                    self.repository
                        .movies
                        .set_rating(movie.id, prediction.rating)
                        .await?;
                    report.scored += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping movie {}: {}", movie.id, e);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_deserializes_upstream_shape() {
        let prediction: Prediction =
            serde_json::from_str(r#"{"userId":3,"movieId":12,"rating":7.5}"#).unwrap();
        assert_eq!(prediction.user_id, 3);
        assert_eq!(prediction.movie_id, 12);
        assert!((prediction.rating - 7.5).abs() < f64::EPSILON);
    }
}
