//! API integration tests.
//!
//! These run against a live server with an empty-ish database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

use filmotek_server::api::auth::Claims;

const BASE_URL: &str = "http://localhost:8080";

/// Mint a bearer token the way the identity provider would
fn auth_token() -> String {
    let secret =
        std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-this-secret-in-production".into());
    let claims = Claims {
        sub: "auth0|integration-test".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        roles: vec!["Admin".to_string()],
    };
    claims.create_token(&secret).expect("Failed to sign token")
}

async fn create_genre(client: &Client, token: &str, name: &str) -> i64 {
    let response = client
        .post(format!("{}/api/genre", BASE_URL))
        .bearer_auth(token)
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create genre");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse genre");
    body["id"].as_i64().expect("No genre ID")
}

async fn create_director(client: &Client, token: &str, name: &str) -> i64 {
    let response = client
        .post(format!("{}/api/director", BASE_URL))
        .bearer_auth(token)
        .json(&json!({ "name": name, "nationality": "Japanese" }))
        .send()
        .await
        .expect("Failed to create director");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse director");
    body["id"].as_i64().expect("No director ID")
}

async fn create_movie(
    client: &Client,
    token: &str,
    title: &str,
    year: i32,
    rating: f64,
    genre_id: i64,
    director_id: i64,
) -> i64 {
    let response = client
        .post(format!(
            "{}/api/movie?genreId={}&directorId={}",
            BASE_URL, genre_id, director_id
        ))
        .bearer_auth(token)
        .json(&json!({
            "title": title,
            "release_year": year,
            "description": "test movie",
            "rating": rating
        }))
        .send()
        .await
        .expect("Failed to create movie");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse movie");
    body["id"].as_i64().expect("No movie ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/movie/trending", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_movie_crud_round_trip() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "RoundTrip Drama").await;
    let director_id = create_director(&client, &token, "RoundTrip Director").await;
    let movie_id = create_movie(
        &client,
        &token,
        "Round Trip",
        1998,
        6.5,
        genre_id,
        director_id,
    )
    .await;

    // GET reflects the input
    let response = client
        .get(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch movie");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse movie");
    assert_eq!(body["title"], "Round Trip");
    assert_eq!(body["release_year"], 1998);

    // PUT a new rating, then GET reflects it
    let response = client
        .put(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .json(&json!({
            "id": movie_id,
            "title": "Round Trip",
            "release_year": 1998,
            "description": "test movie",
            "rating": 9.0
        }))
        .send()
        .await
        .expect("Failed to update movie");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch movie");
    let body: Value = response.json().await.expect("Failed to parse movie");
    assert_eq!(body["rating"], 9.0);

    // DELETE, then GET is a 404
    let response = client
        .delete(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete movie");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch movie");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_movie_rejected() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "Duplicate Noir").await;
    let director_id = create_director(&client, &token, "Duplicate Director").await;
    let movie_id = create_movie(
        &client,
        &token,
        "Duplicate Movie",
        2001,
        5.0,
        genre_id,
        director_id,
    )
    .await;

    // Same title modulo whitespace and case
    let response = client
        .post(format!(
            "{}/api/movie?genreId={}&directorId={}",
            BASE_URL, genre_id, director_id
        ))
        .bearer_auth(&token)
        .json(&json!({
            "title": "  DUPLICATE movie ",
            "release_year": 2001,
            "rating": 5.0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Cleanup
    let _ = client
        .delete(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_duplicate_genre_rejected() {
    let client = Client::new();
    let token = auth_token();

    create_genre(&client, &token, "Duplicate Genre").await;

    let response = client
        .post(format!("{}/api/genre", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": " duplicate GENRE " }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_review_for_missing_movie_rejected() {
    let client = Client::new();
    let token = auth_token();

    let response = client
        .post(format!("{}/api/review?movieId=999999", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "reviewer_name": "ghost",
            "rating": 5,
            "comment": "should never land"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_pagination_covers_pages_without_overlap() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "Pagination Genre").await;
    let director_id = create_director(&client, &token, "Pagination Director").await;
    for i in 0..5 {
        create_movie(
            &client,
            &token,
            &format!("Pagination Movie {}", i),
            1990 + i,
            4.0,
            genre_id,
            director_id,
        )
        .await;
    }

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = client
            .get(format!("{}/api/movie/movies/{}/2", BASE_URL, page))
            .bearer_auth(&token)
            .send()
            .await
            .expect("Failed to fetch page");
        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse page");
        let items = body["items"].as_array().expect("No items array");
        assert!(items.len() <= 2);
        for item in items {
            seen.push(item["id"].as_i64().expect("No id"));
        }
    }

    // Pages concatenate in strictly increasing id order, no duplicates
    let mut sorted = seen.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(seen, sorted);
}

#[tokio::test]
#[ignore]
async fn test_out_of_range_page_is_empty() {
    let client = Client::new();
    let token = auth_token();

    let response = client
        .get(format!("{}/api/movie/movies/9999/50", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch page");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse page");
    assert_eq!(body["items"].as_array().expect("No items array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_trending_sorted_by_rating() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "Trending Genre").await;
    let director_id = create_director(&client, &token, "Trending Director").await;
    for (i, rating) in [9.0, 3.0, 7.0, 9.0, 1.0].iter().enumerate() {
        create_movie(
            &client,
            &token,
            &format!("Trending Movie {}", i),
            2020,
            *rating,
            genre_id,
            director_id,
        )
        .await;
    }

    let response = client
        .get(format!("{}/api/movie/trending", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch trending");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse trending");
    let movies = body.as_array().expect("Not an array");
    assert!(movies.len() <= 5);

    let ratings: Vec<f64> = movies
        .iter()
        .map(|m| m["rating"].as_f64().expect("No rating"))
        .collect();
    let mut sorted = ratings.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(ratings, sorted);
}

#[tokio::test]
#[ignore]
async fn test_years_distinct_and_ascending() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "Years Genre").await;
    let director_id = create_director(&client, &token, "Years Director").await;
    for (i, year) in [2001, 1999, 2001, 2010].iter().enumerate() {
        create_movie(
            &client,
            &token,
            &format!("Years Movie {}", i),
            *year,
            5.0,
            genre_id,
            director_id,
        )
        .await;
    }

    let response = client
        .get(format!("{}/api/movie/years", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch years");
    assert!(response.status().is_success());
    let years: Vec<i64> = response.json().await.expect("Failed to parse years");

    let mut sorted = years.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(years, sorted);
    for year in [1999, 2001, 2010] {
        assert!(years.contains(&year));
    }
}

#[tokio::test]
#[ignore]
async fn test_delete_removes_genre_visibility() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "Ephemeral Genre").await;
    let director_id = create_director(&client, &token, "Ephemeral Director").await;
    let movie_id = create_movie(
        &client,
        &token,
        "Ephemeral Movie",
        2015,
        6.0,
        genre_id,
        director_id,
    )
    .await;

    // Visible through the junction before the delete
    let response = client
        .get(format!("{}/api/movie/byGenreName/Ephemeral%20Genre", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch by genre");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/api/movie/{}", BASE_URL, movie_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete movie");
    assert_eq!(response.status(), 204);

    // Junction rows are gone with the movie
    let response = client
        .get(format!("{}/api/movie/byGenreName/Ephemeral%20Genre", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch by genre");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_search_matches_director_name() {
    let client = Client::new();
    let token = auth_token();

    let genre_id = create_genre(&client, &token, "Search Genre").await;
    let director_id = create_director(&client, &token, "Kurosawa Searchable").await;
    create_movie(
        &client,
        &token,
        "Search Fixture",
        1954,
        8.8,
        genre_id,
        director_id,
    )
    .await;

    let response = client
        .get(format!("{}/api/movie/search/searchable", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to search");
    assert!(response.status().is_success());
    let movies: Vec<Value> = response.json().await.expect("Failed to parse search");
    assert!(movies.iter().any(|m| m["title"] == "Search Fixture"));
}

#[tokio::test]
#[ignore]
async fn test_import_dedups_and_reports() {
    let client = Client::new();
    let token = auth_token();

    let rows = json!({
        "rows": [
            {
                "title": "Imported Movie",
                "release_year": 1977,
                "rating": 7.0,
                "directors": ["Imported Director"],
                "genres": ["Imported Genre"]
            },
            {
                "title": "  imported MOVIE ",
                "release_year": 1977,
                "directors": [],
                "genres": []
            },
            { "title": "   ", "release_year": 2000 }
        ]
    });

    let response = client
        .post(format!("{}/api/movie/import", BASE_URL))
        .bearer_auth(&token)
        .json(&rows)
        .send()
        .await
        .expect("Failed to import");
    assert!(response.status().is_success());

    let report: Value = response.json().await.expect("Failed to parse report");
    assert_eq!(report["created"], 1);
    assert_eq!(report["merged"], 1);
    assert_eq!(report["skipped"], 1);
}
