//! 설정 관리.
//!
//! 이 모듈은 금액 라이브러리를 사용하는 서비스의 공통 설정을 정의하고
//! 환경 변수에서 로드합니다. 금액 엔진 자체는 설정에 의존하지 않습니다.
//!
//! 환경 변수 형식: `<PREFIX>_<SECTION>__<FIELD>`
//! (예: `MONETARY_LOGGING__LEVEL=debug`, `MONETARY_DATABASE__NAME=ledger`).

use crate::error::MonetaryResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 서버 설정
    pub server: ServerConfig,
    /// 데이터베이스 설정 (필수 항목이 있어 명시된 경우에만 존재)
    pub database: Option<DatabaseConfig>,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨 (debug, info, warn, error). 비어 있으면 환경에 따라 결정
    pub level: String,
    /// 로그 형식 (text, json). 비어 있으면 환경에 따라 결정
    pub format: String,
    /// stdout 대신 stderr로 출력
    pub stderr: bool,
    /// 실행 환경 (development, production 등)
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            stderr: false,
            environment: "development".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 개발 환경인지 확인합니다.
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩 주소
    pub address: String,
    /// 요청 헤더 읽기 타임아웃 (초)
    pub read_header_timeout_secs: u64,
    /// 읽기 타임아웃 (초)
    pub read_timeout_secs: u64,
    /// 쓰기 타임아웃 (초)
    pub write_timeout_secs: u64,
    /// 유휴 타임아웃 (초)
    pub idle_timeout_secs: u64,
    /// 종료 대기 타임아웃 (초)
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:3000".to_string(),
            read_header_timeout_secs: 60,
            read_timeout_secs: 10,
            write_timeout_secs: 10,
            idle_timeout_secs: 60,
            shutdown_timeout_secs: 20,
        }
    }
}

impl ServerConfig {
    pub fn read_header_timeout(&self) -> Duration {
        Duration::from_secs(self.read_header_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// 데이터베이스 연결 설정.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// 데이터베이스 이름
    pub name: String,
    /// 사용자
    pub user: String,
    /// 비밀번호
    pub password: String,
    /// 호스트
    #[serde(default = "default_db_host")]
    pub host: String,
    /// 포트
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// SSL 모드
    #[serde(default = "default_db_ssl_mode")]
    pub ssl_mode: String,
    /// 최소 풀 크기
    #[serde(default = "default_pool_min_size")]
    pub pool_min_size: u32,
    /// 최대 풀 크기
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,
}

fn default_db_host() -> String {
    "localhost".to_string()
}
fn default_db_port() -> u16 {
    5432
}
fn default_db_ssl_mode() -> String {
    "disable".to_string()
}
fn default_pool_min_size() -> u32 {
    2
}
fn default_pool_max_size() -> u32 {
    10
}

impl DatabaseConfig {
    fn effective_ssl_mode(&self) -> &str {
        if self.ssl_mode.is_empty() {
            "disable"
        } else {
            &self.ssl_mode
        }
    }

    /// URL 형식의 연결 문자열을 반환합니다.
    pub fn connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}&pool_min_conns={}&pool_max_conns={}",
            self.user,
            self.password,
            self.host,
            self.port,
            self.name,
            self.effective_ssl_mode(),
            self.pool_min_size,
            self.pool_max_size
        )
    }

    /// key=value 형식의 DSN을 반환합니다.
    pub fn dsn(&self) -> String {
        format!(
            "user={} password={} host={} port={} dbname={} pool_min_conns={} pool_max_conns={} sslmode={}",
            self.user,
            self.password,
            self.host,
            self.port,
            self.name,
            self.pool_min_size,
            self.pool_max_size,
            self.effective_ssl_mode()
        )
    }
}

// 비밀번호는 로그에 남기지 않는다
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .field("pool_min_size", &self.pool_min_size)
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

/// 주어진 접두사의 환경 변수 소스를 생성합니다.
pub fn env_source(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// `.env` 파일(있으면)과 환경 변수에서 설정을 로드합니다.
    pub fn from_env(prefix: &str) -> MonetaryResult<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(env_source(prefix))
    }

    /// 주어진 환경 변수 소스로 기본값을 덮어써 설정을 로드합니다.
    pub fn load_from(env: config::Environment) -> MonetaryResult<Self> {
        let settings = config::Config::builder().add_source(env).build()?;
        let config: AppConfig = settings.try_deserialize()?;

        tracing::debug!(
            log_level = %config.logging.level,
            environment = %config.logging.environment,
            address = %config.server.address,
            database = config.database.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }
}
