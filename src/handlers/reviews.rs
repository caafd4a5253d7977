// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for review operations

use crate::errors::DoctorsError;
use crate::models::CreateReviewRequest;
use crate::services::DoctorService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

use super::text;

/// POST /doctors/{doctor_id}/reviews
/// Add a review to an existing doctor
pub async fn create_review(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    req: web::Json<CreateReviewRequest>,
) -> Result<impl Responder, DoctorsError> {
    let (doctor, review) =
        DoctorService::create_review(pool.get_ref(), path.into_inner(), req.into_inner()).await?;
    Ok(text(
        HttpResponse::Created(),
        format!(
            "Added review \"{}\" to doctor {} (id: {})",
            review.description, doctor.name, doctor.id
        ),
    ))
}

/// DELETE /doctors/{doctor_id}/reviews/{review_id}
/// Delete a review from a doctor
pub async fn delete_review(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
) -> Result<impl Responder, DoctorsError> {
    let (doctor_id, review_id) = path.into_inner();
    let (doctor, review) = DoctorService::delete_review(pool.get_ref(), doctor_id, review_id).await?;
    Ok(text(
        HttpResponse::Ok(),
        format!(
            "Deleted review \"{}\" from doctor {} (id: {})",
            review.description, doctor.name, doctor.id
        ),
    ))
}

/// Review routes, relative to the /doctors scope
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/{doctor_id}/reviews", web::post().to(create_review))
        .route(
            "/{doctor_id}/reviews/{review_id}",
            web::delete().to(delete_review),
        );
}

#[cfg(test)]
mod tests {
    use crate::config::db::init_test_pool;
    use crate::handlers::api_config;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::json;
    use sqlx::SqlitePool;

    async fn seeded_pool() -> SqlitePool {
        let pool = init_test_pool().await;
        sqlx::query("INSERT INTO doctor (name) VALUES ('Smith')")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    #[actix_web::test]
    async fn test_add_review_message() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_pool().await))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/doctors/1/reviews")
            .set_json(json!({"description": "Great!"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            test::read_body(resp).await,
            "Added review \"Great!\" to doctor Smith (id: 1)"
        );
    }

    #[actix_web::test]
    async fn test_add_review_to_missing_doctor() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_pool().await))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/doctors/99/reviews")
            .set_json(json!({"description": "Great!"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Doctor not found with id: 99");
    }

    #[actix_web::test]
    async fn test_add_review_rejects_empty_description() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_pool().await))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/doctors/1/reviews")
            .set_json(json!({"description": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_review() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_pool().await))
                .configure(api_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/doctors/1/reviews")
            .set_json(json!({"description": "Great!"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri("/doctors/1/reviews/1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            test::read_body(resp).await,
            "Deleted review \"Great!\" from doctor Smith (id: 1)"
        );

        let req = test::TestRequest::get().uri("/doctors/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["reviews"], json!([]));

        let req = test::TestRequest::delete()
            .uri("/doctors/1/reviews/1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
