// src/models/doctor.rs
// DOCUMENTATION: Doctor records and their API representation
// PURPOSE: Map the doctor table and serialize doctors with nested reviews

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{not_blank, Review, ReviewResponse};

/// Doctor row from the `doctor` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    /// Auto-assigned, never reused
    pub id: i64,

    pub name: String,
}

/// Request body for POST /doctors
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateDoctorRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 50, message = "name must be 1 to 50 characters"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    pub name: String,
}

/// Doctor response DTO with nested reviews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorResponse {
    pub id: i64,
    pub name: String,
    pub reviews: Vec<ReviewResponse>,
}

impl Doctor {
    /// Convert database Doctor into API response
    /// `reviews` must already be limited to this doctor's reviews
    pub fn to_response(&self, reviews: &[Review]) -> DoctorResponse {
        DoctorResponse {
            id: self.id,
            name: self.name.clone(),
            reviews: reviews.iter().map(Review::to_response).collect(),
        }
    }
}

impl CreateDoctorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        CreateDoctorRequest { name: name.into() }
    }
}
