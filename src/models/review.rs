// src/models/review.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::not_blank;

/// Review row from the `review` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub description: String,
    pub doctor_id: i64,
}

/// Request body for POST /doctors/{doctor_id}/reviews
/// An absent description deserializes to an empty string and fails validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 120, message = "description must be 1 to 120 characters"),
        custom(function = "not_blank", message = "description must not be blank")
    )]
    pub description: String,
}

/// Review response DTO exposed via API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub description: String,
    pub doctor_id: i64,
}

impl CreateReviewRequest {
    pub fn new(description: impl Into<String>) -> Self {
        CreateReviewRequest {
            description: description.into(),
        }
    }
}

impl Review {
    /// Convert database Review into API response
    pub fn to_response(&self) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            description: self.description.clone(),
            doctor_id: self.doctor_id,
        }
    }
}
