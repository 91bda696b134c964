//! Director model and DTO

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Director record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Director {
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
}

/// Transport shape of a director
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DirectorDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub nationality: Option<String>,
}

impl From<Director> for DirectorDto {
    fn from(director: Director) -> Self {
        Self {
            id: director.id,
            name: director.name,
            nationality: director.nationality,
        }
    }
}

impl From<DirectorDto> for Director {
    fn from(dto: DirectorDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            nationality: dto.nationality,
        }
    }
}
