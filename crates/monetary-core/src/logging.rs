//! tracing을 사용한 로깅 인프라.
//!
//! 이 모듈은 두 가지 출력 형식을 지원하는 구조화된 로깅을 제공합니다:
//! - **text**: 개발용 사람이 읽기 쉬운 형식
//! - **json**: 운영환경/로그 집계용 JSON 형식
//!
//! 레벨과 형식이 명시되지 않으면 실행 환경으로 결정합니다.
//! 개발 환경은 debug/text, 그 외는 info/json입니다.

use crate::config::{AppConfig, LoggingConfig};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, fmt::writer::BoxMakeWriter, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter,
};

/// 로그 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 사람이 읽기 쉬운 텍스트 형식 (개발용)
    Text,
    /// 로그 집계용 JSON 형식 (운영용)
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// 설정된 레벨 문자열을 해석합니다. 알 수 없으면 실행 환경으로 결정합니다.
pub fn resolve_level(config: &LoggingConfig) -> Level {
    match config.level.to_uppercase().as_str() {
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ if config.is_development() => Level::DEBUG,
        _ => Level::INFO,
    }
}

/// 설정된 형식 문자열을 해석합니다. 알 수 없으면 실행 환경으로 결정합니다.
pub fn resolve_format(config: &LoggingConfig) -> LogFormat {
    match config.format.parse::<LogFormat>() {
        Ok(format) => format,
        Err(_) if config.is_development() => LogFormat::Text,
        Err(_) => LogFormat::Json,
    }
}

/// 주어진 설정으로 로깅 시스템을 초기화합니다.
///
/// `RUST_LOG`가 설정되어 있으면 지시어를 추가로 적용합니다.
/// 전역 subscriber가 이미 설치되어 있으면 에러를 반환합니다.
///
/// # 예제
///
/// ```no_run
/// use monetary_core::config::LoggingConfig;
/// use monetary_core::logging::init_logging;
///
/// let config = LoggingConfig {
///     level: "debug".to_string(),
///     format: "json".to_string(),
///     ..Default::default()
/// };
/// init_logging(&config).unwrap();
/// ```
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let level = resolve_level(config);
    let format = resolve_format(config);

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let writer = if config.stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    match format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer().with_writer(writer).with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer().json().with_writer(writer).with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::info!(
        format = ?format,
        level = %level,
        environment = %config.environment,
        "Logging initialized"
    );

    Ok(())
}

/// 환경 변수에서 로깅을 초기화합니다.
///
/// `<PREFIX>_LOGGING__LEVEL`, `<PREFIX>_LOGGING__FORMAT` 등을 사용합니다.
pub fn init_logging_from_env(prefix: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env(prefix)?;
    init_logging(&config.logging)
}
