//! # Monetary Core
//!
//! 법정화폐와 암호화폐 금액을 정밀하게 다루는 라이브러리입니다.
//!
//! 금액은 자산의 최소 단위(센트, 사토시 등)로 스케일된 임의 정밀도 정수로 저장되며,
//! 이 크레이트는 다음을 제공합니다:
//! - 자산 정의 및 대소문자 무시 카탈로그 조회
//! - 비음수/자산 일치 불변식을 지키는 금액 산술
//! - 정밀도를 보존하는 10진수 파싱 및 포맷
//! - 최소 단위 문자열 기반 JSON 직렬화
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

// `config` 크레이트와 이름이 겹치므로 경로를 명시한다
pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
