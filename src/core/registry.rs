//! # Service Locator - 이름 기반 타입 안전 서비스 레지스트리
//!
//! 임의의 서비스 인스턴스를 문자열 이름으로 등록하고, 조회 시 인스턴스와 함께
//! 등록 시점에 캡처한 [`TypeDescriptor`]를 돌려주는 컨테이너입니다.
//!
//! ## 동작 원리
//!
//! ```text
//! register("db", database)
//!    ├─ Arc::new(database)                  → 공유 참조로 보관
//!    ├─ TypeDescriptor::of::<Database>()    → 등록 시점의 타입 캡처
//!    └─ services.insert("db", entry)        → 같은 이름이면 조용히 덮어쓰기
//!
//! get("db")
//!    ├─ 엔트리 있음 → (instance, type_descriptor)
//!    └─ 엔트리 없음 → RegistryError::NotFound
//!
//! get_as::<Database>("db")
//!    ├─ 타입 일치   → Arc<Database>
//!    └─ 타입 불일치 → RegistryError::TypeMismatch
//! ```
//!
//! ## 전역 상태 없음
//!
//! 로케이터는 전역 static이 아니라 애플리케이션 시작 시 한 번 생성되어
//! 호출 그래프를 따라 명시적으로 전달됩니다 (`web::Data<ServiceLocator>` 등).
//! 테스트마다 독립된 로케이터를 만들 수 있습니다.
//!
//! ## 동시성
//!
//! 내부 맵은 `RwLock`으로 보호됩니다. 시작 단계에서 등록을 마친 뒤
//! 여러 워커가 동시에 조회하는 read-mostly 패턴을 전제로 합니다.
//! 각 연산은 단일 insert 또는 단일 조회이므로, 락이 poison 되더라도
//! 맵이 반쯤 갱신된 상태로 남지 않습니다. 따라서 poison은 무시하고 내부 값을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use std::sync::Arc;
//! use service_locator::core::{RegistryError, ServiceLocator};
//!
//! struct Database {
//!     dsn: String,
//! }
//!
//! let locator = ServiceLocator::new();
//! locator.register("db", Database { dsn: "host=localhost".to_string() });
//!
//! let db: Arc<Database> = locator.get_as("db").unwrap();
//! assert_eq!(db.dsn, "host=localhost");
//!
//! let missing = locator.get("cache").unwrap_err();
//! assert_eq!(missing, RegistryError::not_found("cache"));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::errors::{RegistryError, RegistryResult};
use super::type_descriptor::TypeDescriptor;

/// 타입 소거된 서비스 인스턴스
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// 등록된 서비스 하나
///
/// 클론 비용이 낮습니다. 인스턴스는 `Arc`로 공유되고 디스크립터는 `Copy`입니다.
#[derive(Clone)]
pub struct ServiceEntry {
    name: String,
    instance: SharedInstance,
    type_descriptor: TypeDescriptor,
}

impl ServiceEntry {
    fn new(name: String, instance: SharedInstance, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name,
            instance,
            type_descriptor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance(&self) -> &SharedInstance {
        &self.instance
    }

    /// 등록 시점에 캡처된 타입 디스크립터
    pub fn type_descriptor(&self) -> TypeDescriptor {
        self.type_descriptor
    }

    /// 저장된 인스턴스가 정확히 `T`인지 확인합니다.
    pub fn is<T: Any>(&self) -> bool {
        self.type_descriptor.is::<T>()
    }

    /// 인스턴스를 `T`로 다운캐스트합니다.
    ///
    /// # Errors
    ///
    /// 저장된 타입이 `T`가 아니면 [`RegistryError::TypeMismatch`]를 반환합니다.
    pub fn downcast<T: Any + Send + Sync>(&self) -> RegistryResult<Arc<T>> {
        self.instance
            .clone()
            .downcast::<T>()
            .map_err(|_| RegistryError::TypeMismatch {
                name: self.name.clone(),
                expected: TypeDescriptor::of::<T>(),
                actual: self.type_descriptor,
            })
    }

    /// `(instance, type_descriptor)` 쌍으로 분해합니다.
    pub fn into_parts(self) -> (SharedInstance, TypeDescriptor) {
        (self.instance, self.type_descriptor)
    }
}

impl fmt::Debug for ServiceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceEntry")
            .field("name", &self.name)
            .field("type_descriptor", &self.type_descriptor)
            .finish_non_exhaustive()
    }
}

/// 이름 → 서비스 엔트리 컨테이너
///
/// # 등록 규칙
///
/// - 같은 이름으로 다시 등록하면 이전 엔트리를 조용히 덮어씁니다 (last write wins).
/// - 빈 문자열도 일반적인 유효한 키로 취급합니다.
/// - 제거(unregister)와 이름 열거 기능은 제공하지 않습니다.
///
/// # 조회 규칙
///
/// - 등록된 이름: 가장 최근에 등록된 인스턴스와 그 시점의 타입 디스크립터
/// - 등록되지 않은 이름: 항상 [`RegistryError::NotFound`]
/// - 조회 실패 후에도 로케이터는 그대로 사용할 수 있습니다.
#[derive(Default)]
pub struct ServiceLocator {
    services: RwLock<HashMap<String, ServiceEntry>>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 서비스 인스턴스를 등록합니다.
    ///
    /// 인스턴스는 `Arc`로 감싸져 보관되며, 타입 디스크립터는 이 시점에 캡처됩니다.
    ///
    /// ```rust
    /// use service_locator::core::ServiceLocator;
    ///
    /// let locator = ServiceLocator::new();
    /// locator.register("x", 42_i32);
    /// locator.register("x", "hello".to_string());
    ///
    /// let (instance, descriptor) = locator.get_with_type("x").unwrap();
    /// assert!(descriptor.is::<String>());
    /// assert_eq!(instance.downcast_ref::<String>().unwrap(), "hello");
    /// ```
    pub fn register<T: Any + Send + Sync>(&self, name: impl Into<String>, instance: T) {
        self.register_shared(name, Arc::new(instance));
    }

    /// 이미 `Arc`로 공유 중인 인스턴스를 등록합니다.
    ///
    /// 호출자와 로케이터가 같은 할당을 공유하므로, 이후 조회 결과는
    /// `Arc::ptr_eq`로 원본과 동일함을 확인할 수 있습니다.
    pub fn register_shared<T: Any + Send + Sync>(&self, name: impl Into<String>, instance: Arc<T>) {
        let name = name.into();
        let entry = ServiceEntry::new(name.clone(), instance, TypeDescriptor::of::<T>());

        let mut services = self.services.write().unwrap_or_else(PoisonError::into_inner);
        services.insert(name, entry);
    }

    /// 이름으로 서비스 엔트리를 조회합니다.
    ///
    /// # Errors
    ///
    /// 등록되지 않은 이름이면 [`RegistryError::NotFound`]
    pub fn get(&self, name: &str) -> RegistryResult<ServiceEntry> {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
        services
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// 인스턴스와 타입 디스크립터를 튜플로 조회합니다.
    pub fn get_with_type(&self, name: &str) -> RegistryResult<(SharedInstance, TypeDescriptor)> {
        self.get(name).map(ServiceEntry::into_parts)
    }

    /// 이름으로 조회한 뒤 `T`로 다운캐스트합니다.
    ///
    /// # Errors
    ///
    /// - 등록되지 않은 이름: [`RegistryError::NotFound`]
    /// - 등록된 타입이 `T`가 아님: [`RegistryError::TypeMismatch`]
    pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> RegistryResult<Arc<T>> {
        self.get(name)?.downcast::<T>()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }
}

impl fmt::Debug for ServiceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ServiceLocator")
            .field("services", &services.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct DatabaseHandle {
        dsn: String,
    }

    #[derive(Debug, PartialEq)]
    struct MailerHandle;

    fn database() -> DatabaseHandle {
        DatabaseHandle {
            dsn: "host=localhost port=5432".to_string(),
        }
    }

    fn same_instance<T>(lhs: &SharedInstance, rhs: &Arc<T>) -> bool {
        Arc::as_ptr(lhs) as *const () == Arc::as_ptr(rhs) as *const ()
    }

    #[test]
    fn test_register_then_get_returns_instance_and_type() {
        let locator = ServiceLocator::new();
        let db = Arc::new(database());
        locator.register_shared("db", db.clone());

        let (instance, descriptor) = locator.get_with_type("db").unwrap();

        assert!(same_instance(&instance, &db));
        assert_eq!(descriptor, TypeDescriptor::of::<DatabaseHandle>());
        assert_eq!(instance.downcast_ref::<DatabaseHandle>(), Some(&*db));
    }

    #[test]
    fn test_get_unregistered_name_is_not_found() {
        let locator = ServiceLocator::new();

        let error = locator.get("cache").unwrap_err();

        assert_eq!(error, RegistryError::not_found("cache"));
        assert_eq!(error.to_string(), "service not found: cache");
        assert!(!locator.contains("cache"));
    }

    #[test]
    fn test_overwrite_makes_previous_instance_unreachable() {
        let locator = ServiceLocator::new();
        locator.register("x", 42_i32);
        locator.register("x", "hello".to_string());

        let entry = locator.get("x").unwrap();

        assert!(entry.is::<String>());
        assert!(!entry.is::<i32>());
        assert_eq!(*entry.downcast::<String>().unwrap(), "hello");
        assert!(locator.get_as::<i32>("x").unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_repeated_get_returns_identical_results() {
        let locator = ServiceLocator::new();
        locator.register("db", database());

        let (first, first_type) = locator.get_with_type("db").unwrap();
        let (second, second_type) = locator.get_with_type("db").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first_type, second_type);

        let missing_once = locator.get("cache").unwrap_err();
        let missing_twice = locator.get("cache").unwrap_err();
        assert_eq!(missing_once, missing_twice);
    }

    #[test]
    fn test_distinct_types_have_distinct_descriptors() {
        let locator = ServiceLocator::new();
        locator.register("db", database());
        locator.register("mailer", MailerHandle);

        let db_type = locator.get("db").unwrap().type_descriptor();
        let mailer_type = locator.get("mailer").unwrap().type_descriptor();

        assert_ne!(db_type, mailer_type);
        assert!(db_type.is::<DatabaseHandle>());
        assert!(mailer_type.is::<MailerHandle>());
    }

    #[test]
    fn test_registration_does_not_affect_other_names() {
        let locator = ServiceLocator::new();
        locator.register("a", 1_u8);

        assert!(locator.contains("a"));
        assert!(locator.get("b").unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_as_reports_type_mismatch_with_registered_descriptor() {
        let locator = ServiceLocator::new();
        locator.register("svc", database());

        let entry = locator.get("svc").unwrap();
        assert!(entry.type_descriptor().is::<DatabaseHandle>());

        match locator.get_as::<MailerHandle>("svc") {
            Err(RegistryError::TypeMismatch {
                name,
                expected,
                actual,
            }) => {
                assert_eq!(name, "svc");
                assert!(expected.is::<MailerHandle>());
                assert!(actual.is::<DatabaseHandle>());
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }

        // 타입 불일치 후에도 원래 타입으로는 정상 조회
        assert_eq!(*locator.get_as::<DatabaseHandle>("svc").unwrap(), database());
    }

    #[test]
    fn test_get_as_missing_name_is_not_found() {
        let locator = ServiceLocator::new();

        let error = locator.get_as::<DatabaseHandle>("db").unwrap_err();

        assert!(error.is_not_found());
    }

    #[test]
    fn test_register_shared_keeps_identity() {
        let locator = ServiceLocator::new();
        let db = Arc::new(database());
        locator.register_shared("db", db.clone());

        let fetched = locator.get_as::<DatabaseHandle>("db").unwrap();

        assert!(Arc::ptr_eq(&db, &fetched));
        assert_eq!(Arc::strong_count(&db), 3);
    }

    #[test]
    fn test_empty_name_is_a_valid_key() {
        let locator = ServiceLocator::new();
        locator.register("", 7_u32);

        assert!(locator.contains(""));
        assert_eq!(*locator.get_as::<u32>("").unwrap(), 7);
    }

    #[test]
    fn test_none_instance_is_retrievable_as_option() {
        let locator = ServiceLocator::new();
        locator.register("maybe", None::<String>);

        let entry = locator.get("maybe").unwrap();

        assert!(entry.is::<Option<String>>());
        assert_eq!(*entry.downcast::<Option<String>>().unwrap(), None);
    }

    #[test]
    fn test_entry_exposes_name_and_debug_output() {
        let locator = ServiceLocator::new();
        locator.register("db", database());

        let entry = locator.get("db").unwrap();

        assert_eq!(entry.name(), "db");
        assert!(format!("{:?}", entry).contains("DatabaseHandle"));
        assert!(format!("{:?}", locator).contains("services: 1"));
    }

    #[test]
    fn test_concurrent_lookups_during_registration() {
        let locator = ServiceLocator::new();
        locator.register("db", database());

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let db = locator.get_as::<DatabaseHandle>("db").unwrap();
                        assert_eq!(db.dsn, "host=localhost port=5432");
                    }
                });
            }

            scope.spawn(|| {
                for i in 0..100_u32 {
                    locator.register(format!("worker-{}", i), i);
                }
            });
        });

        assert_eq!(*locator.get_as::<u32>("worker-99").unwrap(), 99);
    }
}
