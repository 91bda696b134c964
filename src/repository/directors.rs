//! Directors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::director::Director,
};

#[derive(Clone)]
pub struct DirectorsRepository {
    pool: Pool<Postgres>,
}

impl DirectorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all directors in id order
    pub async fn list(&self) -> AppResult<Vec<Director>> {
        let directors = sqlx::query_as::<_, Director>(
            "SELECT id, name, nationality FROM directors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(directors)
    }

    /// Get director by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Director> {
        sqlx::query_as::<_, Director>(
            "SELECT id, name, nationality FROM directors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Director {} not found", id)))
    }

    /// Exact name match after trimming and case folding
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Director>> {
        let director = sqlx::query_as::<_, Director>(
            "SELECT id, name, nationality FROM directors \
             WHERE UPPER(TRIM(name)) = UPPER(TRIM($1)) LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(director)
    }

    /// Directors linked to a movie via the movie_directors junction
    pub async fn list_by_movie(&self, movie_id: i32) -> AppResult<Vec<Director>> {
        let directors = sqlx::query_as::<_, Director>(
            r#"
            SELECT d.id, d.name, d.nationality
            FROM movie_directors md
            JOIN directors d ON d.id = md.director_id
            WHERE md.movie_id = $1
            ORDER BY d.id
            "#,
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(directors)
    }

    /// Create a director
    pub async fn create(&self, name: &str, nationality: Option<&str>) -> AppResult<Director> {
        let director = sqlx::query_as::<_, Director>(
            "INSERT INTO directors (name, nationality) VALUES ($1, $2) \
             RETURNING id, name, nationality",
        )
        .bind(name)
        .bind(nationality)
        .fetch_one(&self.pool)
        .await?;
        Ok(director)
    }

    /// Full replace of director fields
    pub async fn update(&self, director: &Director) -> AppResult<Director> {
        sqlx::query_as::<_, Director>(
            "UPDATE directors SET name = $1, nationality = $2 WHERE id = $3 \
             RETURNING id, name, nationality",
        )
        .bind(&director.name)
        .bind(&director.nationality)
        .bind(director.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Director {} not found", director.id)))
    }

    /// Delete a director
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Director {} not found", id)));
        }

        Ok(())
    }
}
