//! # Service Locator Server
//!
//! 서비스 로케이터를 구성하고 actix-web 서버로 조회 API를 제공합니다.
//!
//! 1. `.env` 프로필 로드 (`RUST_LOG` 포함)
//! 2. 로깅 초기화
//! 3. `"config"`, `"db"` 등록
//! 4. `/health`, `/api/v1/services/{name}`, `/api/v1/database` 서빙

use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};
use service_locator::bootstrap::{build_service_locator, init_logging};
use service_locator::config::{load_env_file, AppConfig};
use service_locator::routes::{configure_all_routes, route_not_found};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_file = load_env_file();
    init_logging();
    env_file.log();

    let config = AppConfig::from_env();
    info!("🚀 서비스 시작중... (environment: {})", config.environment.as_str());

    let locator = match build_service_locator(&config) {
        Ok(locator) => web::Data::new(locator),
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 등록되었습니다!");

    let bind_address = config.server.bind_address();
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(locator.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
            .default_service(web::to(route_not_found))
    })
        .bind(bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}
