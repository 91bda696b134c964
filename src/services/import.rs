//! Bulk catalog import.
//!
//! Accepts spreadsheet-shaped rows and loads them into the catalog:
//! movies deduplicated by (title, release year), directors and genres
//! resolved by name and created when missing, junction links idempotent.

use crate::{
    error::AppResult,
    models::{
        import::{ImportAction, ImportReport, ImportRow},
        movie::Movie,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ImportService {
    repository: Repository,
}

impl ImportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Import a batch of rows, returning a per-batch report
    pub async fn import(&self, rows: &[ImportRow]) -> AppResult<ImportReport> {
        let mut report = ImportReport::new();

        for (index, row) in rows.iter().enumerate() {
            let title = row.title.trim();
            if title.is_empty() {
                report
                    .warnings
                    .push(format!("Row {}: empty title, skipped", index + 1));
                report.record(ImportAction::Skipped);
                continue;
            }

            let existing = self
                .repository
                .movies
                .find_by_title_and_year(title, row.release_year)
                .await?;

            let (movie_id, action) = match existing {
                Some(movie) => (movie.id, ImportAction::Merged),
                None => {
                    let movie = Movie {
                        id: 0,
                        title: title.to_string(),
                        release_year: row.release_year,
                        description: row.description.clone(),
                        rating: row.rating,
                    };
                    (self.repository.movies.insert(&movie).await?, ImportAction::Created)
                }
            };

            for name in &row.directors {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                let director = match self.repository.directors.find_by_name(name).await? {
                    Some(director) => director,
                    None => self.repository.directors.create(name, None).await?,
                };
                self.repository
                    .movies
                    .link_director(movie_id, director.id)
                    .await?;
            }

            for name in &row.genres {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                let genre = match self.repository.genres.find_by_name(name).await? {
                    Some(genre) => genre,
                    None => self.repository.genres.create(name).await?,
                };
                self.repository.movies.link_genre(movie_id, genre.id).await?;
            }

            report.record(action);
        }

        tracing::info!(
            "Import finished: {} created, {} merged, {} skipped",
            report.created,
            report.merged,
            report.skipped
        );

        Ok(report)
    }
}
