//! 호출자 쪽 애플리케이션 에러
//!
//! 레지스트리 에러([`crate::core::RegistryError`])를 HTTP 응답으로 변환하는 계층입니다.

pub mod errors;

pub use errors::*;
