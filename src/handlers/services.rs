//! # Service Lookup HTTP Handlers
//!
//! 서비스 로케이터를 조회하는 호출자 쪽 핸들러입니다.
//! 로케이터는 전역 상태가 아니라 `web::Data<ServiceLocator>`로 주입됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/services/{name}` | 등록된 서비스의 타입 정보 | 200 / 500 |
//! | `GET` | `/api/v1/database` | `"db"` 핸들의 접속 정보 | 200 / 500 |
//!
//! 조회 실패(`NotFound`, `TypeMismatch`)는 모두 서버 구성 문제이므로 500으로 응답합니다.

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde::Serialize;

use crate::bootstrap::DB_SERVICE;
use crate::core::ServiceLocator;
use crate::db::Database;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub short_type: String,
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub host: String,
    pub port: u16,
    pub database: String,
}

/// 이름으로 서비스를 조회하여 등록된 타입 정보를 반환합니다.
#[get("/services/{name}")]
pub async fn describe_service(
    locator: web::Data<ServiceLocator>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = name.into_inner();

    let entry = locator.get(&name).inspect_err(|e| warn!("서비스 조회 실패: {}", e))?;
    let descriptor = entry.type_descriptor();

    Ok(HttpResponse::Ok().json(ServiceDescription {
        name,
        type_name: descriptor.name().to_string(),
        short_type: descriptor.short_name(),
    }))
}

/// `"db"`로 등록된 데이터베이스 핸들을 타입 검사 후 조회합니다.
#[get("/database")]
pub async fn database_status(locator: web::Data<ServiceLocator>) -> Result<HttpResponse, AppError> {
    let database = locator
        .get_as::<Database>(DB_SERVICE)
        .inspect_err(|e| warn!("데이터베이스 핸들 조회 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(DatabaseStatus {
        host: database.host().to_string(),
        port: database.port(),
        database: database.database_name().to_string(),
    }))
}
