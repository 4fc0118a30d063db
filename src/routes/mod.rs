//! 라우트 구성 모듈
//!
//! | 경로 | 핸들러 |
//! |------|--------|
//! | `/health` | [`health_check`] |
//! | `/api/v1/services/{name}` | [`handlers::services::describe_service`] |
//! | `/api/v1/database` | [`handlers::services::database_status`] |
//! | 그 외 | [`route_not_found`] (404) |

use crate::errors::AppError;
use crate::handlers;
use actix_web::{web, HttpRequest};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_service_routes(cfg);
}

fn configure_service_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::services::describe_service)
            .service(handlers::services::database_status)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 매칭되는 라우트가 없을 때의 기본 핸들러
///
/// `App::default_service(web::to(route_not_found))`로 등록합니다.
pub async fn route_not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(
            App::new()
                .configure(configure_all_routes)
                .default_service(web::to(route_not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/cleaning-tasks").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not found: /api/cleaning-tasks");
    }
}
