//! # Registry Error Types
//!
//! 서비스 로케이터가 직접 반환하는 에러 타입입니다.
//!
//! ## 에러 분류
//!
//! | 에러 | 발생 위치 | 의미 |
//! |------|-----------|------|
//! | `NotFound` | `get`, `get_with_type`, `get_as` | 해당 이름으로 등록된 서비스가 없음 |
//! | `TypeMismatch` | `get_as`, `ServiceEntry::downcast` | 등록된 인스턴스의 타입이 요청 타입과 다름 |
//!
//! 두 에러 모두 조회 시점에서 종료되며, 레지스트리는 재시도나 기본값 대체를 하지 않습니다.
//! HTTP 응답 등으로의 변환은 호출자(`crate::errors::AppError`)의 책임입니다.

use thiserror::Error;

use super::type_descriptor::TypeDescriptor;

/// 서비스 로케이터 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// 요청한 이름으로 등록된 서비스가 없습니다.
    ///
    /// 제거 연산이 없으므로 "한 번도 등록된 적 없는 이름"이 유일한 원인입니다.
    #[error("service not found: {name}")]
    NotFound { name: String },

    /// 등록된 인스턴스가 호출자가 기대한 타입이 아닙니다.
    ///
    /// `expected`는 호출자가 요청한 타입, `actual`은 등록 시점에 캡처된 타입입니다.
    #[error("type mismatch for service {name}: expected {expected}, found {actual}")]
    TypeMismatch {
        name: String,
        expected: TypeDescriptor,
        actual: TypeDescriptor,
    },
}

impl RegistryError {
    pub fn not_found(name: impl Into<String>) -> Self {
        RegistryError::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, RegistryError::TypeMismatch { .. })
    }

    /// 에러가 발생한 서비스 이름
    pub fn service_name(&self) -> &str {
        match self {
            RegistryError::NotFound { name } => name,
            RegistryError::TypeMismatch { name, .. } => name,
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_service() {
        let error = RegistryError::not_found("cache");

        assert_eq!(error.to_string(), "service not found: cache");
        assert!(error.is_not_found());
        assert!(!error.is_type_mismatch());
        assert_eq!(error.service_name(), "cache");
    }

    #[test]
    fn test_type_mismatch_message_lists_both_types() {
        let error = RegistryError::TypeMismatch {
            name: "svc".to_string(),
            expected: TypeDescriptor::of::<u64>(),
            actual: TypeDescriptor::of::<String>(),
        };

        let message = error.to_string();
        assert!(message.starts_with("type mismatch for service svc"));
        assert!(message.contains("expected u64"));
        assert!(message.contains(std::any::type_name::<String>()));
        assert!(error.is_type_mismatch());
        assert_eq!(error.service_name(), "svc");
    }
}
