//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경 변수에서 읽습니다. `.env` 프로필 파일 로드는
//! [`load_env_file`]을 참고하세요.
//!
//! # Examples
//!
//! ```rust,ignore
//! use service_locator::config::{load_env_file, AppConfig};
//!
//! load_env_file().log();
//! let config = AppConfig::from_env();
//! println!("{}", config.server.bind_address());
//! ```

pub mod data_config;

pub use data_config::*;
