use thiserror::Error;

use crate::core::RegistryError;

/// 애플리케이션 전역 에러 타입
///
/// 레지스트리를 사용하는 호출자 쪽(부트스트랩, HTTP 핸들러)의 에러입니다.
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 레지스트리 에러 변환
///
/// | RegistryError | AppError | HTTP |
/// |---------------|----------|------|
/// | `NotFound` | `InternalError` | 500 |
/// | `TypeMismatch` | `InternalError` | 500 |
///
/// 인프라 서비스가 없거나 타입이 다르면 클라이언트 요청의 문제가 아니라
/// 서버 구성 문제이므로 500으로 응답합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 설정값 오류 (500)
    ///
    /// DSN 형식 오류, 잘못된 포트 번호 등 시작 단계의 설정 문제입니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        AppError::InternalError(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;
