// src/db/review_repository.rs
// DOCUMENTATION: Review database operations
// PURPOSE: Handle create/read/delete operations for doctor reviews

use crate::errors::DoctorsError;
use crate::models::Review;
use sqlx::SqliteConnection;

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review under an existing doctor
    /// The insert selects from `doctor`, so a missing doctor inserts nothing
    /// and the statement still takes the write lock before any read
    pub async fn create_review(
        conn: &mut SqliteConnection,
        doctor_id: i64,
        description: &str,
    ) -> Result<Review, DoctorsError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO review (description, doctor_id)
            SELECT ?, id FROM doctor WHERE id = ?
            RETURNING id, description, doctor_id
            "#,
        )
        .bind(description)
        .bind(doctor_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            log::error!("Failed to create review for doctor {}: {}", doctor_id, e);
            DoctorsError::DatabaseError(format!("Create review failed: {}", e))
        })?
        .ok_or(DoctorsError::DoctorNotFound(doctor_id))?;

        log::info!("Created review {} for doctor {}", review.id, doctor_id);
        Ok(review)
    }

    /// Get a review by ID
    #[allow(dead_code)]
    pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Review, DoctorsError> {
        sqlx::query_as::<_, Review>("SELECT id, description, doctor_id FROM review WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch review {}: {}", id, e);
                DoctorsError::DatabaseError(format!("Fetch review failed: {}", e))
            })?
            .ok_or(DoctorsError::ReviewNotFound(id))
    }

    /// Get reviews for a doctor, oldest first
    pub async fn get_reviews_by_doctor(
        conn: &mut SqliteConnection,
        doctor_id: i64,
    ) -> Result<Vec<Review>, DoctorsError> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, description, doctor_id FROM review
            WHERE doctor_id = ?
            ORDER BY id
            "#,
        )
        .bind(doctor_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reviews for doctor {}: {}", doctor_id, e);
            DoctorsError::DatabaseError(format!("Fetch reviews failed: {}", e))
        })
    }

    /// Every review, ordered by doctor then id
    /// Used to nest reviews when listing all doctors in one pass
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Review>, DoctorsError> {
        sqlx::query_as::<_, Review>(
            "SELECT id, description, doctor_id FROM review ORDER BY doctor_id, id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            log::error!("Failed to list reviews: {}", e);
            DoctorsError::DatabaseError(format!("List reviews failed: {}", e))
        })
    }

    /// Delete a single review owned by `doctor_id`
    /// A review under another doctor is left alone and reported as not found
    pub async fn delete_review(
        conn: &mut SqliteConnection,
        doctor_id: i64,
        review_id: i64,
    ) -> Result<Review, DoctorsError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            DELETE FROM review
            WHERE id = ? AND doctor_id = ?
            RETURNING id, description, doctor_id
            "#,
        )
        .bind(review_id)
        .bind(doctor_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            log::error!("Delete failed for review {}: {}", review_id, e);
            DoctorsError::DatabaseError(format!("Delete review failed: {}", e))
        })?
        .ok_or(DoctorsError::ReviewNotFound(review_id))?;

        log::info!("Deleted review {} from doctor {}", review.id, doctor_id);
        Ok(review)
    }

    /// Delete all reviews owned by a doctor
    /// Returns the number of removed rows
    pub async fn delete_reviews_by_doctor(
        conn: &mut SqliteConnection,
        doctor_id: i64,
    ) -> Result<u64, DoctorsError> {
        let result = sqlx::query("DELETE FROM review WHERE doctor_id = ?")
            .bind(doctor_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                log::error!("Failed to delete reviews for doctor {}: {}", doctor_id, e);
                DoctorsError::DatabaseError(format!("Delete reviews failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }
}
