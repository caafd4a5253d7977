// src/handlers/doctors.rs
// DOCUMENTATION: HTTP handlers for doctor operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::DoctorsError;
use crate::models::CreateDoctorRequest;
use crate::services::DoctorService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

use super::text;

/// POST /doctors
/// Create a new doctor
pub async fn create_doctor(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreateDoctorRequest>,
) -> Result<impl Responder, DoctorsError> {
    let doctor = DoctorService::create_doctor(pool.get_ref(), req.into_inner()).await?;
    Ok(text(
        HttpResponse::Created(),
        format!("Added doctor {}", doctor.name),
    ))
}

/// GET /doctors
/// List all doctors and their reviews
pub async fn list_doctors(pool: web::Data<SqlitePool>) -> Result<impl Responder, DoctorsError> {
    let doctors = DoctorService::list_doctors(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(doctors))
}

/// GET /doctors/{doctor_id}
/// Retrieve a doctor and its reviews
pub async fn get_doctor(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, DoctorsError> {
    let doctor = DoctorService::get_doctor(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doctor))
}

/// DELETE /doctors/{doctor_id}
/// Delete a doctor together with its reviews
pub async fn delete_doctor(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, DoctorsError> {
    let doctor = DoctorService::delete_doctor(pool.get_ref(), path.into_inner()).await?;
    Ok(text(
        HttpResponse::Ok(),
        format!("Deleted doctor {} (id: {})", doctor.name, doctor.id),
    ))
}

/// Doctor routes, relative to the /doctors scope
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_doctor))
        .route("", web::get().to(list_doctors))
        .route("/{doctor_id}", web::get().to(get_doctor))
        .route("/{doctor_id}", web::delete().to(delete_doctor));
}
