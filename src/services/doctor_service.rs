// src/services/doctor_service.rs
// DOCUMENTATION: Business logic for doctors and reviews
// PURPOSE: Run each operation as one unit of work between handlers and repositories

use crate::db::{DoctorRepository, ReviewRepository};
use crate::errors::DoctorsError;
use crate::models::{CreateDoctorRequest, CreateReviewRequest, Doctor, DoctorResponse, Review};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;
use validator::Validate;

pub struct DoctorService;

async fn begin(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, DoctorsError> {
    pool.begin().await.map_err(|e| {
        log::error!("Failed to begin transaction: {}", e);
        DoctorsError::DatabaseError(format!("Begin transaction failed: {}", e))
    })
}

async fn commit(tx: Transaction<'static, Sqlite>) -> Result<(), DoctorsError> {
    tx.commit().await.map_err(|e| {
        log::error!("Failed to commit transaction: {}", e);
        DoctorsError::DatabaseError(format!("Commit failed: {}", e))
    })
}

fn validate<T: Validate>(req: &T) -> Result<(), DoctorsError> {
    req.validate()
        .map_err(|e| DoctorsError::ValidationError(e.to_string()))
}

// Every method opens its own transaction. An early return through `?` drops
// the transaction, which rolls it back.
//
// Mutating methods issue a write as their first statement. SQLite then takes
// the write lock up front and waits on the busy timeout; a read followed by a
// write would instead fail with SQLITE_BUSY when another writer got there first.
impl DoctorService {
    /// Create a new doctor
    pub async fn create_doctor(
        pool: &SqlitePool,
        req: CreateDoctorRequest,
    ) -> Result<Doctor, DoctorsError> {
        validate(&req)?;

        let mut tx = begin(pool).await?;
        let doctor = DoctorRepository::create_doctor(&mut tx, &req.name).await?;
        commit(tx).await?;
        Ok(doctor)
    }

    /// Add a review to an existing doctor
    /// Returns the owning doctor alongside the review for the confirmation message
    pub async fn create_review(
        pool: &SqlitePool,
        doctor_id: i64,
        req: CreateReviewRequest,
    ) -> Result<(Doctor, Review), DoctorsError> {
        validate(&req)?;

        let mut tx = begin(pool).await?;
        let review = ReviewRepository::create_review(&mut tx, doctor_id, &req.description).await?;
        let doctor = DoctorRepository::get_by_id(&mut tx, doctor_id).await?;
        commit(tx).await?;
        Ok((doctor, review))
    }

    /// List all doctors with their reviews
    pub async fn list_doctors(pool: &SqlitePool) -> Result<Vec<DoctorResponse>, DoctorsError> {
        let mut tx = begin(pool).await?;
        let doctors = DoctorRepository::list_all(&mut tx).await?;
        let reviews = ReviewRepository::list_all(&mut tx).await?;
        commit(tx).await?;

        let mut by_doctor: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_doctor.entry(review.doctor_id).or_default().push(review);
        }

        Ok(doctors
            .iter()
            .map(|doctor| {
                let reviews = by_doctor.get(&doctor.id).map(Vec::as_slice).unwrap_or(&[]);
                doctor.to_response(reviews)
            })
            .collect())
    }

    /// Get one doctor with its reviews
    pub async fn get_doctor(pool: &SqlitePool, id: i64) -> Result<DoctorResponse, DoctorsError> {
        let mut tx = begin(pool).await?;
        let doctor = DoctorRepository::get_by_id(&mut tx, id).await?;
        let reviews = ReviewRepository::get_reviews_by_doctor(&mut tx, doctor.id).await?;
        commit(tx).await?;

        Ok(doctor.to_response(&reviews))
    }

    /// Delete a review from a doctor
    /// A missing doctor wins over a missing review when reporting not found
    pub async fn delete_review(
        pool: &SqlitePool,
        doctor_id: i64,
        review_id: i64,
    ) -> Result<(Doctor, Review), DoctorsError> {
        let mut tx = begin(pool).await?;
        let review = match ReviewRepository::delete_review(&mut tx, doctor_id, review_id).await {
            Ok(review) => review,
            Err(DoctorsError::ReviewNotFound(id)) => {
                DoctorRepository::get_by_id(&mut tx, doctor_id).await?;
                return Err(DoctorsError::ReviewNotFound(id));
            }
            Err(e) => return Err(e),
        };
        let doctor = DoctorRepository::get_by_id(&mut tx, doctor_id).await?;
        commit(tx).await?;
        Ok((doctor, review))
    }

    /// Delete a doctor and every review it owns
    pub async fn delete_doctor(pool: &SqlitePool, id: i64) -> Result<Doctor, DoctorsError> {
        let mut tx = begin(pool).await?;
        let removed = ReviewRepository::delete_reviews_by_doctor(&mut tx, id).await?;
        let doctor = DoctorRepository::get_by_id(&mut tx, id).await?;
        DoctorRepository::delete_doctor(&mut tx, doctor.id).await?;
        commit(tx).await?;

        log::info!("Deleted doctor {} with {} review(s)", doctor.id, removed);
        Ok(doctor)
    }
}
