//! # Application Bootstrap
//!
//! 로깅 초기화와 서비스 로케이터 구성을 담당합니다.
//!
//! ## 시작 순서
//!
//! ```text
//! 1. load_env_file()           → .env 프로필 로드
//! 2. init_logging()            → env_logger 초기화
//! 3. AppConfig::from_env()     → 설정 로드
//! 4. build_service_locator()   → "config", "db" 등록 (단일 스레드)
//! 5. HttpServer 시작            → web::Data<ServiceLocator>로 공유 (읽기 위주)
//! ```

use std::sync::Arc;

use env_logger::Env;
use log::info;

use crate::config::AppConfig;
use crate::core::{ServiceLocator, TypeDescriptor};
use crate::db::Database;
use crate::errors::AppResult;

/// 데이터베이스 핸들의 등록 이름
pub const DB_SERVICE: &str = "db";

/// 애플리케이션 설정의 등록 이름
pub const CONFIG_SERVICE: &str = "config";

pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 인프라 서비스를 등록한 새 로케이터를 생성합니다.
///
/// # Errors
///
/// 데이터베이스 DSN이 올바르지 않으면 `AppError::ConfigError`
pub fn build_service_locator(config: &AppConfig) -> AppResult<ServiceLocator> {
    let locator = ServiceLocator::new();

    register_logged(&locator, CONFIG_SERVICE, Arc::new(config.clone()));

    info!("📡 데이터베이스 핸들 생성 중...");
    let database = Database::new(&config.database)?;
    info!(
        "✅ 데이터베이스 핸들 준비됨: {}:{}/{}",
        database.host(),
        database.port(),
        database.database_name()
    );
    register_logged(&locator, DB_SERVICE, Arc::new(database));

    Ok(locator)
}

fn register_logged<T: std::any::Any + Send + Sync>(locator: &ServiceLocator, name: &str, instance: Arc<T>) {
    info!("📦 Registering: {} ({})", name, TypeDescriptor::of::<T>().short_name());
    locator.register_shared(name, instance);
}
