//! Data models and transport DTOs

pub mod director;
pub mod genre;
pub mod import;
pub mod movie;
pub mod review;
