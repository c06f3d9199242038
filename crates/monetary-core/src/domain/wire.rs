//! 저장/전송용 금액 표현.
//!
//! 금액은 최소 단위의 10진 정수 문자열로 직렬화됩니다. 정수 폭이 제한된
//! JSON 소비자에서 정밀도를 잃지 않기 위함입니다. 금액이 없으면 빈 문자열입니다.
//!
//! ```json
//! { "asset": { "asset": "USD", "precision": 2, "symbol": "$", "class": "currency" },
//!   "amount": "10050" }
//! ```

use super::monetary::Monetary;
use crate::error::{MonetaryError, MonetaryResult};
use crate::types::{Amount, Asset, MAX_PRECISION};
use serde::{Deserialize, Serialize};

/// `Monetary`의 직렬화 형식.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryWire {
    /// 자산
    pub asset: Asset,
    /// 최소 단위 금액 문자열 (없으면 빈 문자열)
    pub amount: String,
}

impl From<Monetary> for MonetaryWire {
    fn from(monetary: Monetary) -> Self {
        Self {
            amount: monetary.amount().to_wire_string(),
            asset: monetary.asset().clone(),
        }
    }
}

impl TryFrom<MonetaryWire> for Monetary {
    type Error = MonetaryError;

    /// 금액 문자열이 10진 정수가 아니거나 정밀도가 `MAX_PRECISION`을 넘으면
    /// `InvalidFormat`입니다.
    /// 부분 값을 그대로 복원하므로 비음수 검증은 하지 않습니다.
    fn try_from(wire: MonetaryWire) -> Result<Self, Self::Error> {
        if wire.asset.precision() > MAX_PRECISION {
            return Err(MonetaryError::InvalidFormat(format!(
                "precision {} exceeds {}",
                wire.asset.precision(),
                MAX_PRECISION
            )));
        }
        let amount = Amount::parse_integer(&wire.amount)?;
        Ok(Monetary::from_parts(wire.asset, amount))
    }
}

impl Monetary {
    /// JSON 문자열로 직렬화합니다.
    pub fn to_json(&self) -> MonetaryResult<String> {
        Ok(serde_json::to_string(&MonetaryWire::from(self.clone()))?)
    }

    /// JSON 문자열에서 역직렬화합니다.
    ///
    /// 구조 에러는 `Serialization`, 금액 문자열 에러는 `InvalidFormat`으로 구분됩니다.
    pub fn from_json(json: &str) -> MonetaryResult<Self> {
        let wire: MonetaryWire = serde_json::from_str(json)?;
        Monetary::try_from(wire)
    }
}
