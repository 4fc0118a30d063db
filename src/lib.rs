//! 이름 기반 타입 안전 서비스 로케이터
//!
//! 임의의 서비스 인스턴스를 문자열 이름으로 등록하고, 조회 시 인스턴스와 함께
//! 등록 시점의 타입 디스크립터를 반환하는 레지스트리입니다.
//! 잘못된 타입으로 꺼내려는 시도는 레지스트리가 직접 `TypeMismatch`로 보고합니다.
//!
//! # Features
//!
//! - **명시적 로케이터**: 전역 싱글톤 없이 시작 시 생성하여 전달
//! - **검사된 다운캐스트**: `TypeId` 기반 `get_as::<T>()`
//! - **동시 조회**: `RwLock` 기반, 시작 후 여러 워커에서 읽기
//! - **HTTP 호출자**: actix-web 핸들러가 조회 에러를 500 응답으로 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/services/{name}, /api/v1/database
//! └─────────────────┘
//!          │ web::Data<ServiceLocator>
//!          ▼
//! ┌─────────────────┐
//! │ ServiceLocator  │ ← name → (Arc<dyn Any>, TypeDescriptor)
//! └─────────────────┘
//!          ▲
//!          │ register("config"), register("db")
//! ┌─────────────────┐
//! │    Bootstrap    │ ← 설정 로드, 로깅 초기화
//! └─────────────────┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod routes;
