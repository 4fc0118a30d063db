//! HTTP 핸들러 모듈
//!
//! 서비스 로케이터의 호출자 역할을 하는 얇은 HTTP 계층입니다.
//! 조회 에러를 [`AppError`](crate::errors::AppError)로 변환하여 응답합니다.

pub mod services;
