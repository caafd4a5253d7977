// src/db/doctor_repository.rs
// DOCUMENTATION: Doctor database operations
// PURPOSE: SQL for the doctor table, run on a caller-provided connection

use crate::errors::DoctorsError;
use crate::models::Doctor;
use sqlx::SqliteConnection;

/// DoctorRepository: all database operations for doctors
/// Every method takes the connection of the caller's transaction
pub struct DoctorRepository;

impl DoctorRepository {
    /// Insert a doctor and return the stored row
    pub async fn create_doctor(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<Doctor, DoctorsError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctor (name)
            VALUES (?)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            log::error!("Failed to create doctor: {}", e);
            DoctorsError::DatabaseError(format!("Create doctor failed: {}", e))
        })?;

        log::info!("Created doctor with id: {}", doctor.id);
        Ok(doctor)
    }

    /// Get a doctor by ID
    /// Absence is reported as DoctorNotFound
    pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Doctor, DoctorsError> {
        sqlx::query_as::<_, Doctor>("SELECT id, name FROM doctor WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch doctor {}: {}", id, e);
                DoctorsError::DatabaseError(format!("Fetch doctor failed: {}", e))
            })?
            .ok_or(DoctorsError::DoctorNotFound(id))
    }

    /// List every doctor in insertion order
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Doctor>, DoctorsError> {
        sqlx::query_as::<_, Doctor>("SELECT id, name FROM doctor ORDER BY id")
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                log::error!("Failed to list doctors: {}", e);
                DoctorsError::DatabaseError(format!("List doctors failed: {}", e))
            })
    }

    /// Delete a doctor row
    /// Reviews must already be gone, the foreign key rejects the delete otherwise
    pub async fn delete_doctor(conn: &mut SqliteConnection, id: i64) -> Result<(), DoctorsError> {
        let rows = sqlx::query("DELETE FROM doctor WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                log::error!("Delete failed for doctor {}: {}", id, e);
                DoctorsError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(DoctorsError::DoctorNotFound(id));
        }

        log::info!("Deleted doctor: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::db::init_test_pool;

    #[tokio::test]
    async fn test_create_and_get_doctor() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = DoctorRepository::create_doctor(&mut conn, "Smith").await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Smith");

        let loaded = DoctorRepository::get_by_id(&mut conn, created.id).await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_get_missing_doctor() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let result = DoctorRepository::get_by_id(&mut conn, 42).await;
        assert!(matches!(result, Err(DoctorsError::DoctorNotFound(42))));
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        DoctorRepository::create_doctor(&mut conn, "Smith").await.unwrap();
        DoctorRepository::create_doctor(&mut conn, "Jones").await.unwrap();

        let names: Vec<String> = DoctorRepository::list_all(&mut conn)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Smith", "Jones"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let first = DoctorRepository::create_doctor(&mut conn, "Smith").await.unwrap();
        DoctorRepository::delete_doctor(&mut conn, first.id).await.unwrap();

        let second = DoctorRepository::create_doctor(&mut conn, "Jones").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_schema_rejects_blank_name() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        for name in ["", "  "] {
            let result = DoctorRepository::create_doctor(&mut conn, name).await;
            assert!(matches!(result, Err(DoctorsError::DatabaseError(_))));
        }

        let too_long = "a".repeat(51);
        let result = DoctorRepository::create_doctor(&mut conn, &too_long).await;
        assert!(matches!(result, Err(DoctorsError::DatabaseError(_))));

        let doctors = DoctorRepository::list_all(&mut conn).await.unwrap();
        assert!(doctors.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_doctor() {
        let pool = init_test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let result = DoctorRepository::delete_doctor(&mut conn, 9).await;
        assert!(matches!(result, Err(DoctorsError::DoctorNotFound(9))));
    }
}
