//! # Core Module
//!
//! 이름 기반 서비스 로케이터와 그 에러 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 로케이터
//! - **ServiceLocator**: 이름 → (인스턴스, 타입 디스크립터) 컨테이너
//! - **ServiceEntry**: 등록된 서비스 하나, 안전한 다운캐스트 제공
//!
//! ### [`type_descriptor`] - 런타임 타입 정보
//! - **TypeDescriptor**: `TypeId` + 타입 이름, 등록 시점에 캡처
//!
//! ### [`errors`] - 레지스트리 에러
//! - **RegistryError**: `NotFound`, `TypeMismatch`
//!
//! ## 설계 원칙
//!
//! - 전역 싱글톤 없음: 로케이터는 시작 시 생성되어 명시적으로 전달됩니다.
//! - 타입 소거 + 검사된 다운캐스트: 잘못된 타입 요청은 레지스트리가 직접 에러로 보고합니다.
//! - 레지스트리 자체는 로깅, 재시도, 기본값 대체를 하지 않습니다.

pub mod errors;
pub mod registry;
pub mod type_descriptor;

pub use errors::*;
pub use registry::*;
pub use type_descriptor::*;
