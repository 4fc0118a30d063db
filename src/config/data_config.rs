//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 데이터베이스 DSN, 서버 바인딩 설정을 환경 변수에서 읽어옵니다.
//! `.env` 파일은 [`load_env_file`]이 `PROFILE`에 맞춰 먼저 로드합니다.

use std::env;

use log::{error, info};

/// 기본 PostgreSQL DSN (libpq `key=value` 형식)
pub const DEFAULT_DATABASE_DSN: &str =
    "host=localhost user=postgres password=postgres port=5432 sslmode=disable";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// `.env` 파일 로드 결과
///
/// 로거 초기화 전에 로드되므로 결과 기록은 [`EnvFileLoad::log`]로 미룹니다.
#[derive(Debug)]
pub struct EnvFileLoad {
    pub profile: String,
    pub file: &'static str,
    pub error: Option<String>,
}

impl EnvFileLoad {
    pub fn log(&self) {
        info!("Current profile: {}", self.profile);
        match &self.error {
            None => info!("{} 파일 로드 됨", self.file),
            Some(e) => error!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}

/// 프로필에 대응하는 `.env` 파일 이름
///
/// | PROFILE | 파일 |
/// |---------|------|
/// | `dev` (기본값) | `.env.dev` |
/// | `prod` | `.env.prod` |
/// | 그 외 | `.env` |
pub fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// `PROFILE`에 맞는 `.env` 파일을 로드합니다.
///
/// `RUST_LOG`도 이 파일에서 읽을 수 있도록 로거 초기화보다 먼저 호출합니다.
/// 파일이 없어도 실패하지 않습니다. 이미 설정된 환경 변수가 우선합니다.
pub fn load_env_file() -> EnvFileLoad {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file = env_file_for_profile(&profile);

    let error = match file {
        ".env" => dotenv::dotenv().err().filter(|e| !e.not_found()),
        _ => dotenv::from_filename(file).err(),
    }
    .map(|e| e.to_string());

    EnvFileLoad { profile, file, error }
}

/// 데이터베이스 접속 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub dsn: String,
}

impl DatabaseConfig {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self { dsn: dsn.into() }
    }

    /// `DATABASE_DSN` 환경 변수에서 DSN을 읽습니다.
    ///
    /// 설정되지 않은 경우 [`DEFAULT_DATABASE_DSN`]을 사용합니다.
    pub fn from_env() -> Self {
        Self::new(env::var("DATABASE_DSN").unwrap_or_else(|_| DEFAULT_DATABASE_DSN.to_string()))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_DSN)
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 기본값 `0.0.0.0` (모든 인터페이스)
    /// - `PORT`: 기본값 `1323`
    /// - `SERVER_WORKERS`: 기본값 `4`
    ///
    /// 파싱할 수 없는 값은 에러를 로그로 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let workers = match env::var("SERVER_WORKERS") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(0) | Err(_) => {
                    error!("SERVER_WORKERS 값이 올바르지 않음: {}. 기본값 {} 사용", raw, defaults.workers);
                    defaults.workers
                }
                Ok(workers) => workers,
            },
            Err(_) => defaults.workers,
        };

        Self { host, port, workers }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 1323,
            workers: 4,
        }
    }
}

/// 애플리케이션 전체 설정
///
/// 서비스 로케이터에 `"config"` 이름으로 등록됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            database: DatabaseConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_for_profile() {
        assert_eq!(env_file_for_profile("dev"), ".env.dev");
        assert_eq!(env_file_for_profile("prod"), ".env.prod");
        assert_eq!(env_file_for_profile("staging"), ".env");
    }

    #[test]
    fn test_missing_env_file_is_reported_not_fatal() {
        // 로거 없이 호출해도 결과가 보존되어야 합니다
        let load = load_env_file();

        assert_eq!(load.file, env_file_for_profile(&load.profile));
        if let Some(e) = &load.error {
            assert!(!e.is_empty());
        }
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_round_trips_through_name() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(Environment::from_str(env.as_str()), env);
        }
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("DATABASE_DSN").is_err() {
            assert_eq!(DatabaseConfig::from_env().dsn, DEFAULT_DATABASE_DSN);
        }
        assert_eq!(DatabaseConfig::default().dsn, DEFAULT_DATABASE_DSN);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_env();

        if env::var("PORT").is_err() {
            assert_eq!(config.port, 1323);
        }

        if env::var("HOST").is_err() {
            assert_eq!(config.host, "0.0.0.0");
        }

        if env::var("SERVER_WORKERS").is_err() {
            assert_eq!(config.workers, 4);
        }
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 1,
        };

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:1323");
    }
}
