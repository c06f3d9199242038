//! 금액 연산의 에러 타입.
//!
//! 이 모듈은 금액 생성, 산술, 파싱, 직렬화 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 금액 처리 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonetaryError {
    /// 금액이 필요한 곳에 금액이 없음
    #[error("amount cannot be nil")]
    NilAmount,

    /// 금액 또는 연산 결과가 0보다 작음
    #[error("amount cannot be negative")]
    NegativeAmount,

    /// 서로 다른 자산 간 연산
    #[error("assets do not match: {left} and {right}")]
    AssetMismatch { left: String, right: String },

    /// 0으로 나누기
    #[error("division by zero")]
    DivisionByZero,

    /// 파싱할 수 없는 숫자 문자열
    #[error("invalid decimal format: {0}")]
    InvalidFormat(String),

    /// 빈 입력 문자열
    #[error("amount string cannot be empty")]
    EmptyInput,

    /// 직렬화 에러
    #[error("serialization error: {0}")]
    Serialization(String),

    /// 설정 에러
    #[error("configuration error: {0}")]
    Config(String),
}

/// 금액 연산을 위한 Result 타입.
pub type MonetaryResult<T> = Result<T, MonetaryError>;

impl MonetaryError {
    /// 입력값 자체가 잘못된 에러인지 확인합니다.
    ///
    /// 호출자가 입력을 고쳐 다시 시도할 수 있는 에러는 `true`,
    /// 자산 불일치처럼 연산 조합이 잘못된 경우는 `false`입니다.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MonetaryError::InvalidFormat(_) | MonetaryError::EmptyInput
        )
    }

    /// 금액 불변식(존재, 비음수) 위반인지 확인합니다.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            MonetaryError::NilAmount | MonetaryError::NegativeAmount
        )
    }

    pub(crate) fn asset_mismatch(left: &str, right: &str) -> Self {
        MonetaryError::AssetMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl From<serde_json::Error> for MonetaryError {
    fn from(err: serde_json::Error) -> Self {
        MonetaryError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for MonetaryError {
    fn from(err: config::ConfigError) -> Self {
        MonetaryError::Config(err.to_string())
    }
}
