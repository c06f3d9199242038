//! 최소 단위 정수 금액.

use crate::error::{MonetaryError, MonetaryResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;

/// 자산의 최소 단위(센트, 사토시 등)로 표현된 정수 금액.
///
/// `Absent`는 값이 설정되지 않은 부분 값(예: 빈 필드에서 역직렬화된 값)을
/// 나타내며 산술 연산에서는 거부됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Amount {
    /// 값 없음
    #[default]
    Absent,
    /// 최소 단위 정수 값
    Value(BigInt),
}

impl Amount {
    /// 값이 있으면 참조를 반환합니다.
    pub fn value(&self) -> Option<&BigInt> {
        match self {
            Amount::Absent => None,
            Amount::Value(v) => Some(v),
        }
    }

    /// 값이 없는지 확인합니다.
    pub fn is_absent(&self) -> bool {
        matches!(self, Amount::Absent)
    }

    /// 값을 요구합니다. 없으면 `NilAmount`.
    pub fn require(&self) -> MonetaryResult<&BigInt> {
        self.value().ok_or(MonetaryError::NilAmount)
    }

    /// 0 이상의 값을 요구합니다.
    pub fn require_non_negative(&self) -> MonetaryResult<&BigInt> {
        let value = self.require()?;
        if value.is_negative() {
            return Err(MonetaryError::NegativeAmount);
        }
        Ok(value)
    }

    /// 값이 있고 0인지 확인합니다.
    pub fn is_zero(&self) -> bool {
        self.value().is_some_and(Zero::is_zero)
    }

    /// 10진 정수 문자열을 파싱합니다.
    ///
    /// 빈 문자열은 `Absent`가 됩니다. 부호(`+`/`-`) 외에는 ASCII 숫자만 허용합니다.
    pub fn parse_integer(text: &str) -> MonetaryResult<Self> {
        if text.is_empty() {
            return Ok(Amount::Absent);
        }

        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MonetaryError::InvalidFormat(text.to_string()));
        }

        text.parse::<BigInt>()
            .map(Amount::Value)
            .map_err(|_| MonetaryError::InvalidFormat(text.to_string()))
    }

    /// 직렬화용 문자열을 반환합니다. 값이 없으면 빈 문자열입니다.
    pub fn to_wire_string(&self) -> String {
        match self {
            Amount::Absent => String::new(),
            Amount::Value(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Absent => write!(f, "nil"),
            Amount::Value(v) => write!(f, "{}", v),
        }
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Self {
        Amount::Value(value)
    }
}

impl From<&BigInt> for Amount {
    fn from(value: &BigInt) -> Self {
        Amount::Value(value.clone())
    }
}

impl From<Option<BigInt>> for Amount {
    fn from(value: Option<BigInt>) -> Self {
        value.map_or(Amount::Absent, Amount::Value)
    }
}

macro_rules! impl_amount_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Self {
                    Amount::Value(BigInt::from(value))
                }
            }
        )*
    };
}

impl_amount_from_int!(i32, i64, i128, u32, u64, u128, usize);
