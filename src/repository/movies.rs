//! Movies repository: paginated listing, relation filters, aggregates.
//!
//! Junction tables (movie_genres, movie_directors) are traversed with
//! explicit joins; nothing is lazily loaded.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::movie::Movie,
};

const MOVIE_COLUMNS: &str = "id, title, release_year, description, rating";

#[derive(Clone)]
pub struct MoviesRepository {
    pool: Pool<Postgres>,
}

impl MoviesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List one page of movies in stable id order.
    ///
    /// `page_number` is 1-based; pages past the end yield an empty slice.
    pub async fn list_paged(&self, page_number: i64, page_size: i64) -> AppResult<(Vec<Movie>, i64)> {
        let offset = (page_number.max(1) - 1) * page_size;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;

        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies ORDER BY id LIMIT $1 OFFSET $2",
            MOVIE_COLUMNS
        ))
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((movies, total))
    }

    /// List every movie in id order (recommendation sweep)
    pub async fn list_all(&self) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies ORDER BY id",
            MOVIE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Get movie by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies WHERE id = $1",
            MOVIE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))
    }

    /// Exact title match after trimming and case folding. Duplicate-detection
    /// helper for create.
    pub async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies WHERE UPPER(TRIM(title)) = UPPER(TRIM($1)) LIMIT 1",
            MOVIE_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movie)
    }

    /// Find a movie by exact (trimmed, case-folded) title and release year.
    /// Used by bulk import to avoid duplicate rows.
    pub async fn find_by_title_and_year(&self, title: &str, year: i32) -> AppResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies \
             WHERE UPPER(TRIM(title)) = UPPER(TRIM($1)) AND release_year = $2 LIMIT 1",
            MOVIE_COLUMNS
        ))
        .bind(title)
        .bind(year)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movie)
    }

    /// Movies linked to a genre, matched by name case-insensitively
    pub async fn list_by_genre_name(&self, name: &str) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.release_year, m.description, m.rating
            FROM movie_genres mg
            JOIN genres g ON g.id = mg.genre_id
            JOIN movies m ON m.id = mg.movie_id
            WHERE LOWER(g.name) = LOWER($1)
            ORDER BY m.id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Movies linked to a director, matched by name case-insensitively
    pub async fn list_by_director_name(&self, name: &str) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.release_year, m.description, m.rating
            FROM movie_directors md
            JOIN directors d ON d.id = md.director_id
            JOIN movies m ON m.id = md.movie_id
            WHERE LOWER(d.name) = LOWER($1)
            ORDER BY m.id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Movies released in the given year
    pub async fn list_by_year(&self, year: i32) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies WHERE release_year = $1 ORDER BY id",
            MOVIE_COLUMNS
        ))
        .bind(year)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Distinct release years, ascending
    pub async fn list_years(&self) -> AppResult<Vec<i32>> {
        let years: Vec<i32> = sqlx::query_scalar(
            "SELECT DISTINCT release_year FROM movies ORDER BY release_year",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(years)
    }

    // =========================================================================
    // AGGREGATES
    // =========================================================================

    /// Top 5 movies by rating descending. Ties break stable by id ascending.
    pub async fn trending(&self) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM movies ORDER BY rating DESC NULLS LAST, id LIMIT 5",
            MOVIE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Top 5 movies in a genre, grouped by movie id and ranked by average
    /// rating descending. Each movie carries a single scalar rating, so the
    /// grouping degenerates to sorting distinct matches by rating; the shape
    /// is kept for when per-relation ratings are introduced.
    pub async fn best_by_genre(&self, name: &str) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.release_year, m.description, m.rating
            FROM movie_genres mg
            JOIN genres g ON g.id = mg.genre_id
            JOIN movies m ON m.id = mg.movie_id
            WHERE LOWER(g.name) = LOWER($1)
            GROUP BY m.id
            ORDER BY AVG(m.rating) DESC NULLS LAST, m.id
            LIMIT 5
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Top 5 movies for a director; same grouped-ranking shape as
    /// [`best_by_genre`](Self::best_by_genre).
    pub async fn best_by_director(&self, name: &str) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.release_year, m.description, m.rating
            FROM movie_directors md
            JOIN directors d ON d.id = md.director_id
            JOIN movies m ON m.id = md.movie_id
            WHERE LOWER(d.name) = LOWER($1)
            GROUP BY m.id
            ORDER BY AVG(m.rating) DESC NULLS LAST, m.id
            LIMIT 5
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    /// Case-insensitive substring search over titles and linked director names
    pub async fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.release_year, m.description, m.rating
            FROM movies m
            WHERE m.title ILIKE '%' || $1 || '%'
               OR EXISTS (
                   SELECT 1 FROM movie_directors md
                   JOIN directors d ON d.id = md.director_id
                   WHERE md.movie_id = m.id AND d.name ILIKE '%' || $1 || '%'
               )
            ORDER BY m.id
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a movie plus one genre and one director link in a single
    /// transaction. Either everything lands or nothing does.
    pub async fn create(&self, movie: &Movie, genre_id: i32, director_id: i32) -> AppResult<Movie> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO movies (title, release_year, description, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&movie.title)
        .bind(movie.release_year)
        .bind(&movie.description)
        .bind(movie.rating)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2)")
            .bind(id)
            .bind(genre_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO movie_directors (movie_id, director_id) VALUES ($1, $2)")
            .bind(id)
            .bind(director_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Insert a bare movie row without junction links (bulk import path)
    pub async fn insert(&self, movie: &Movie) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO movies (title, release_year, description, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&movie.title)
        .bind(movie.release_year)
        .bind(&movie.description)
        .bind(movie.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Link a movie to a genre; no-op when the link already exists
    pub async fn link_genre(&self, movie_id: i32, genre_id: i32) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(genre_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Link a movie to a director; no-op when the link already exists
    pub async fn link_director(&self, movie_id: i32, director_id: i32) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO movie_directors (movie_id, director_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(director_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Full replace of scalar fields
    pub async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET title = $1, release_year = $2, description = $3, rating = $4
            WHERE id = $5
            "#,
        )
        .bind(&movie.title)
        .bind(movie.release_year)
        .bind(&movie.description)
        .bind(movie.rating)
        .bind(movie.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Movie {} not found", movie.id)));
        }

        self.get_by_id(movie.id).await
    }

    /// Set only the rating (recommendation sweep)
    pub async fn set_rating(&self, id: i32, rating: f64) -> AppResult<()> {
        sqlx::query("UPDATE movies SET rating = $1 WHERE id = $2")
            .bind(rating)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Delete a movie. Junction rows go with it via ON DELETE CASCADE.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Movie {} not found", id)));
        }

        Ok(())
    }
}
