//! 자산 및 자산 유형 정의.
//!
//! 이 모듈은 금액이 묶이는 자산 관련 타입을 정의합니다:
//! - `AssetClass` - 자산 유형 (법정화폐, 암호화폐, 그 외)
//! - `Asset` - 코드, 정밀도, 표시 기호를 가진 자산

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 자산 유형 분류.
///
/// 직렬화 형식은 소문자 문자열입니다. 알 수 없는 유형은 `Other`로 보존되어
/// 다른 생산자가 만든 페이로드도 그대로 복원됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum AssetClass {
    /// 법정화폐
    Currency,
    /// 암호화폐
    Cryptocurrency,
    /// 카탈로그에 없는 유형 (예: commodity)
    Other(String),
}

impl AssetClass {
    /// 직렬화에 쓰이는 문자열 표현.
    pub fn as_str(&self) -> &str {
        match self {
            AssetClass::Currency => "currency",
            AssetClass::Cryptocurrency => "cryptocurrency",
            AssetClass::Other(name) => name,
        }
    }
}

impl From<String> for AssetClass {
    fn from(name: String) -> Self {
        match name.as_str() {
            "currency" => AssetClass::Currency,
            "cryptocurrency" => AssetClass::Cryptocurrency,
            _ => AssetClass::Other(name),
        }
    }
}

impl From<AssetClass> for String {
    fn from(class: AssetClass) -> Self {
        match class {
            AssetClass::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 역직렬화 시 허용하는 최대 정밀도 (256비트 정수의 10진 자릿수).
pub const MAX_PRECISION: u32 = 78;

/// 금액이 표시되는 자산.
///
/// 정밀도는 최소 단위 표현에서 소수점 아래 자릿수입니다.
/// 예: USD는 2 (센트), BTC는 8 (사토시), ETH는 18 (wei).
///
/// 두 자산은 코드가 같으면 같은 자산으로 취급합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// 자산 코드 (예: USD, BTC)
    #[serde(rename = "asset")]
    code: Cow<'static, str>,
    /// 소수점 아래 자릿수
    precision: u32,
    /// 표시 기호 (예: $, R$, BTC)
    symbol: Cow<'static, str>,
    /// 자산 유형
    class: AssetClass,
}

impl Asset {
    /// 새 자산을 생성합니다. 코드는 대문자로 정규화됩니다.
    pub fn new(
        code: impl Into<String>,
        precision: u32,
        symbol: impl Into<String>,
        class: AssetClass,
    ) -> Self {
        Self {
            code: Cow::Owned(code.into().to_uppercase()),
            precision,
            symbol: Cow::Owned(symbol.into()),
            class,
        }
    }

    /// 법정화폐 자산을 생성합니다.
    pub fn currency(code: impl Into<String>, precision: u32, symbol: impl Into<String>) -> Self {
        Self::new(code, precision, symbol, AssetClass::Currency)
    }

    /// 암호화폐 자산을 생성합니다. 기호는 코드와 같습니다.
    pub fn cryptocurrency(code: impl Into<String>, precision: u32) -> Self {
        let code = code.into().to_uppercase();
        Self::new(code.clone(), precision, code, AssetClass::Cryptocurrency)
    }

    /// 정적 카탈로그용 상수 생성자.
    pub(crate) const fn from_static(
        code: &'static str,
        precision: u32,
        symbol: &'static str,
        class: AssetClass,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            precision,
            symbol: Cow::Borrowed(symbol),
            class,
        }
    }

    /// 자산 코드를 반환합니다.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 소수점 아래 자릿수를 반환합니다.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// 표시 기호를 반환합니다.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// 자산 유형을 반환합니다.
    pub fn class(&self) -> &AssetClass {
        &self.class
    }

    /// 다른 자산과 코드가 같은지 확인합니다.
    pub fn same_as(&self, other: &Asset) -> bool {
        self.code == other.code
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.symbol)
    }
}
