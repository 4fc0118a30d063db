//! # Type Descriptor
//!
//! 타입 소거된 서비스 인스턴스의 실제 타입을 런타임에 확인하기 위한 디스크립터입니다.
//! 등록 시점에 한 번 캡처되며, 이후 조회 시에는 캡처된 값을 그대로 반환합니다.
//!
//! ## 구성
//!
//! | 필드 | 출처 | 용도 |
//! |------|------|------|
//! | `id` | `TypeId::of::<T>()` | 동일성 비교, 안전한 다운캐스트 |
//! | `name` | `std::any::type_name::<T>()` | 에러 메시지, 진단 출력 |
//!
//! `type_name`의 결과는 컴파일러 버전에 따라 달라질 수 있으므로
//! 비교에는 절대 사용하지 않고 오직 `TypeId`로만 비교합니다.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 런타임에 검사 가능한 구체 타입 정보
///
/// `Copy` 타입이므로 레지스트리 엔트리, 에러 값 등에 자유롭게 복사해 넣을 수 있습니다.
///
/// # 예제
///
/// ```rust
/// use service_locator::core::TypeDescriptor;
///
/// let descriptor = TypeDescriptor::of::<String>();
/// assert!(descriptor.is::<String>());
/// assert!(!descriptor.is::<&str>());
/// assert_eq!(descriptor.short_name(), "String");
/// ```
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// 정적 타입 `T`의 디스크립터를 생성합니다.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 값의 구체 타입에 대한 디스크립터를 생성합니다.
    ///
    /// `&dyn Any`를 넘기면 트레이트 객체 자체의 타입이 잡히므로,
    /// 반드시 구체 타입의 참조를 넘겨야 합니다.
    pub fn of_val<T: Any>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// 디스크립터가 정확히 `T`를 가리키는지 확인합니다.
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// 모듈 경로를 포함한 전체 타입 이름
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 모듈 경로를 제거한 타입 이름을 반환합니다.
    ///
    /// 제네릭 인자 안쪽의 경로도 함께 제거합니다.
    ///
    /// ```text
    /// alloc::string::String                   → String
    /// alloc::sync::Arc<service_locator::db::Database> → Arc<Database>
    /// core::option::Option<(u8, alloc::string::String)> → Option<(u8, String)>
    /// ```
    pub fn short_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len());
        let mut segment = String::new();

        for ch in self.name.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                segment.push(ch);
            } else {
                result.push_str(strip_path(&segment));
                segment.clear();
                result.push(ch);
            }
        }
        result.push_str(strip_path(&segment));

        result
    }
}

/// `a::b::C` 형태의 경로에서 마지막 세그먼트만 남깁니다.
fn strip_path(segment: &str) -> &str {
    match segment.rfind("::") {
        Some(pos) => &segment[pos + 2..],
        None => segment,
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name).finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
