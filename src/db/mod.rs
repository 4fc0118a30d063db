//! # Database Handle
//!
//! 서비스 로케이터에 `"db"` 이름으로 등록되는 데이터베이스 핸들입니다.
//!
//! 이 핸들은 접속 정보를 보관하는 불투명한 값일 뿐, 연결이나 쿼리,
//! 마이그레이션, 커넥션 풀링은 수행하지 않습니다. 실제 영속성 계층은 외부 협력자입니다.
//!
//! ## DSN 형식
//!
//! libpq `keyword=value` 형식을 사용합니다:
//!
//! ```bash
//! export DATABASE_DSN="host=localhost user=postgres password=postgres port=5432 sslmode=disable"
//! ```
//!
//! - `=` 앞뒤 공백 허용: `host = localhost`
//! - 공백이 포함된 값은 작은따옴표: `password='a b'`
//! - `\'`, `\\` 이스케이프
//! - URI 형식(`postgres://...`)은 거부합니다.

use std::collections::BTreeMap;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// 기본 PostgreSQL 포트
const DEFAULT_PORT: u16 = 5432;

const URI_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

#[derive(Clone)]
pub struct Database {
    dsn: String,
    params: BTreeMap<String, String>,
}

impl Database {
    /// 설정에서 DSN을 파싱하여 핸들을 생성합니다.
    ///
    /// # Errors
    ///
    /// - DSN이 비어 있는 경우
    /// - URI 형식(`postgres://...`)인 경우
    /// - `keyword = value` 문법에 맞지 않는 경우 (`=` 누락, 빈 키, 닫히지 않은 따옴표)
    /// - `port` 값이 숫자가 아닌 경우
    pub fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let dsn = config.dsn.trim();
        if dsn.is_empty() {
            return Err(AppError::ConfigError("database DSN is empty".to_string()));
        }

        if URI_SCHEMES.iter().any(|scheme| dsn.starts_with(scheme)) {
            return Err(AppError::ConfigError(
                "URI DSNs are not supported, use keyword=value form".to_string(),
            ));
        }

        let params = parse_keyword_value(dsn)?;

        if let Some(port) = params.get("port") {
            port.parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("invalid DSN port {}: {}", port, e)))?;
        }

        Ok(Self {
            dsn: dsn.to_string(),
            params,
        })
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn host(&self) -> &str {
        self.param("host").unwrap_or("localhost")
    }

    pub fn port(&self) -> u16 {
        // new()에서 이미 검증됨
        self.param("port")
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// 접속할 데이터베이스 이름
    ///
    /// `dbname`이 없으면 libpq와 동일하게 `user` 값을 사용하고,
    /// 둘 다 없으면 `postgres`를 사용합니다.
    pub fn database_name(&self) -> &str {
        self.param("dbname")
            .or_else(|| self.param("user"))
            .unwrap_or("postgres")
    }
}

/// libpq `keyword = value` 문법을 파싱합니다.
fn parse_keyword_value(dsn: &str) -> Result<BTreeMap<String, String>, AppError> {
    let mut params = BTreeMap::new();
    let mut chars = dsn.chars().peekable();

    loop {
        skip_whitespace(&mut chars);
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' || c.is_whitespace() {
                break;
            }
            key.push(c);
            chars.next();
        }

        skip_whitespace(&mut chars);
        if chars.next() != Some('=') {
            return Err(AppError::ConfigError(format!(
                "invalid DSN: missing \"=\" after \"{}\"",
                key
            )));
        }
        if key.is_empty() {
            return Err(AppError::ConfigError("invalid DSN: empty keyword".to_string()));
        }

        skip_whitespace(&mut chars);
        let mut value = String::new();
        if chars.next_if_eq(&'\'').is_some() {
            loop {
                let c = match chars.next() {
                    Some('\\') => chars.next(),
                    Some('\'') => break,
                    other => other,
                };
                match c {
                    Some(c) => value.push(c),
                    None => {
                        return Err(AppError::ConfigError(format!(
                            "invalid DSN: unterminated quoted value for \"{}\"",
                            key
                        )));
                    }
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                chars.next();
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        value.push(escaped);
                    }
                } else {
                    value.push(c);
                }
            }
        }

        params.insert(key, value);
    }

    Ok(params)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted: BTreeMap<&str, &str> = self
            .params
            .iter()
            .map(|(key, value)| {
                let value = if key == "password" { "********" } else { value.as_str() };
                (key.as_str(), value)
            })
            .collect();

        f.debug_struct("Database")
            .field("params", &redacted)
            .finish()
    }
}
