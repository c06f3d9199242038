//! 자산에 묶인 금액.
//!
//! 금액은 자산의 최소 단위 정수(`BigInt`)로 저장됩니다.
//! 모든 산술 연산은 새 `Monetary`를 반환하며 입력값을 변경하지 않습니다.
//!
//! # 예제
//!
//! ```
//! use monetary_core::{Monetary, USD};
//!
//! let price = Monetary::from_decimal_str(USD, "100.50").unwrap();
//! let tip = Monetary::from_decimal_str(USD, "50.25").unwrap();
//! let total = price.add(&tip).unwrap();
//!
//! assert_eq!(total.format_amount(), "150.75");
//! assert_eq!(total.to_string(), "[USD ($) 150.75]");
//! ```

use super::wire::MonetaryWire;
use crate::error::{MonetaryError, MonetaryResult};
use crate::types::decimal::{
    decimal_to_units, format_units, from_rust_decimal, parse_decimal, units_to_decimal,
    units_to_rust_decimal,
};
use crate::types::{Amount, Asset};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 특정 자산의 금액.
///
/// 생성자와 산술 연산은 금액이 존재하고 0 이상임을 보장합니다.
/// `from_decimal`과 역직렬화만 예외이며, 이렇게 만든 값은 `validate`로 확인할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonetaryWire", into = "MonetaryWire")]
pub struct Monetary {
    asset: Asset,
    amount: Amount,
}

impl Monetary {
    /// 최소 단위 정수로 금액을 생성합니다.
    pub fn from_integer(asset: Asset, amount: impl Into<Amount>) -> MonetaryResult<Self> {
        let amount = amount.into();
        amount.require_non_negative()?;
        Ok(Self { asset, amount })
    }

    /// 10진수 문자열(예: "100.50")로 금액을 생성합니다.
    ///
    /// 음수 문자열도 파싱은 되지만, 정밀도로 절사한 결과가 음수이면 `NegativeAmount`입니다.
    /// 예: USD "-0.001"은 0센트로 절사되어 성공합니다.
    pub fn from_decimal_str(asset: Asset, text: &str) -> MonetaryResult<Self> {
        let decimal = parse_decimal(text)?;
        let monetary = Self::from_decimal(asset, Some(&decimal));
        monetary.validate()?;
        Ok(monetary)
    }

    /// 10진수 값으로 금액을 생성합니다 (`value * 10^precision`, 0 방향 절사).
    ///
    /// `None`이면 금액이 없는 값을 만듭니다. 비음수 검증은 하지 않습니다.
    pub fn from_decimal(asset: Asset, decimal: Option<&BigDecimal>) -> Self {
        let amount = match decimal {
            Some(value) => Amount::Value(decimal_to_units(value, asset.precision())),
            None => Amount::Absent,
        };
        Self { asset, amount }
    }

    /// `rust_decimal::Decimal` 값으로 금액을 생성합니다.
    pub fn from_rust_decimal(asset: Asset, value: rust_decimal::Decimal) -> MonetaryResult<Self> {
        let monetary = Self::from_decimal(asset, Some(&from_rust_decimal(value)));
        monetary.validate()?;
        Ok(monetary)
    }

    /// 0 금액을 생성합니다.
    pub fn zero(asset: Asset) -> Self {
        Self {
            asset,
            amount: Amount::Value(BigInt::zero()),
        }
    }

    /// 검증 없이 생성합니다. 직렬화 경계에서만 사용합니다.
    pub(crate) fn from_parts(asset: Asset, amount: Amount) -> Self {
        Self { asset, amount }
    }

    /// 자산을 반환합니다.
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// 최소 단위 금액을 반환합니다.
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// 금액 불변식을 확인합니다.
    pub fn validate(&self) -> MonetaryResult<()> {
        self.amount.require_non_negative().map(|_| ())
    }

    /// 금액이 있고 0인지 확인합니다.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// 명시적인 깊은 복사본을 반환합니다.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn ensure_same_asset(&self, other: &Monetary) -> MonetaryResult<()> {
        if self.asset.same_as(&other.asset) {
            Ok(())
        } else {
            Err(MonetaryError::asset_mismatch(
                self.asset.code(),
                other.asset.code(),
            ))
        }
    }

    fn units(&self) -> MonetaryResult<&BigInt> {
        self.amount.require_non_negative()
    }

    fn with_units(&self, units: BigInt) -> Self {
        Self {
            asset: self.asset.clone(),
            amount: Amount::Value(units),
        }
    }

    /// 두 금액을 더합니다.
    pub fn add(&self, other: &Monetary) -> MonetaryResult<Self> {
        self.ensure_same_asset(other)?;
        let sum = self.units()? + other.units()?;
        Ok(self.with_units(sum))
    }

    /// 다른 금액을 뺍니다. 결과가 음수이면 `NegativeAmount`입니다.
    pub fn subtract(&self, other: &Monetary) -> MonetaryResult<Self> {
        self.ensure_same_asset(other)?;
        let difference = self.units()? - other.units()?;
        if difference.is_negative() {
            return Err(MonetaryError::NegativeAmount);
        }
        Ok(self.with_units(difference))
    }

    /// 정수 배수를 곱합니다.
    pub fn multiply(&self, factor: impl Into<Amount>) -> MonetaryResult<Self> {
        let factor = factor.into();
        let factor = factor.require()?;
        if factor.is_negative() {
            return Err(MonetaryError::NegativeAmount);
        }
        let product = self.units()? * factor;
        Ok(self.with_units(product))
    }

    /// 정수로 나눕니다. 나머지는 버립니다 (100센트 / 3 = 33센트).
    pub fn divide(&self, divisor: impl Into<Amount>) -> MonetaryResult<Self> {
        let divisor = divisor.into();
        let divisor = divisor.require()?;
        if divisor.is_zero() {
            return Err(MonetaryError::DivisionByZero);
        }
        if divisor.is_negative() {
            return Err(MonetaryError::NegativeAmount);
        }
        let quotient = self.units()? / divisor;
        Ok(self.with_units(quotient))
    }

    /// 자산과 금액이 모두 같은지 확인합니다. 자산이 다르면 `false`입니다.
    pub fn equal(&self, other: &Monetary) -> bool {
        self == other
    }

    /// 같은 자산의 두 금액을 비교합니다.
    pub fn compare(&self, other: &Monetary) -> MonetaryResult<Ordering> {
        self.ensure_same_asset(other)?;
        let left = self.amount.require()?;
        let right = other.amount.require()?;
        Ok(left.cmp(right))
    }

    /// `self > other`
    pub fn greater_than(&self, other: &Monetary) -> MonetaryResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self < other`
    pub fn less_than(&self, other: &Monetary) -> MonetaryResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// 자산 정밀도에 맞춘 고정 소수점 문자열. 금액이 없으면 `"nil"`.
    pub fn format_amount(&self) -> String {
        match self.amount.value() {
            Some(units) => format_units(units, self.asset.precision()),
            None => "nil".to_string(),
        }
    }

    /// 정확한 10진수 값. 금액이 없으면 `None`.
    pub fn to_decimal(&self) -> Option<BigDecimal> {
        self.amount
            .value()
            .map(|units| units_to_decimal(units, self.asset.precision()))
    }

    /// `rust_decimal::Decimal` 값. 금액이 없거나 범위를 넘으면 `None`.
    pub fn to_rust_decimal(&self) -> Option<rust_decimal::Decimal> {
        self.amount
            .value()
            .and_then(|units| units_to_rust_decimal(units, self.asset.precision()))
    }
}

impl fmt::Display for Monetary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.asset, self.format_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::{BTC, ETH, GBP, JPY, USD};
    use rust_decimal_macros::dec;

    fn usd(text: &str) -> Monetary {
        Monetary::from_decimal_str(USD, text).unwrap()
    }

    #[test]
    fn test_from_integer() {
        let m = Monetary::from_integer(USD, 10050).unwrap();
        assert_eq!(m.amount(), &Amount::from(10050));
        assert_eq!(m.asset(), &USD);

        assert!(Monetary::from_integer(USD, 0).unwrap().is_zero());
        assert_eq!(
            Monetary::from_integer(USD, Amount::Absent),
            Err(MonetaryError::NilAmount)
        );
        assert_eq!(
            Monetary::from_integer(USD, -100),
            Err(MonetaryError::NegativeAmount)
        );
    }

    #[test]
    fn test_from_integer_large() {
        let large: BigInt = "999999999999999999999999999999999999999999".parse().unwrap();
        let m = Monetary::from_integer(USD, &large).unwrap();
        assert_eq!(m.amount().value(), Some(&large));
    }

    #[test]
    fn test_from_decimal_str() {
        assert_eq!(usd("100.50").amount(), &Amount::from(10050));
        assert_eq!(usd("100").amount(), &Amount::from(10000));

        let btc = Monetary::from_decimal_str(BTC, "0.00123456").unwrap();
        assert_eq!(btc.amount(), &Amount::from(123456));

        assert_eq!(
            Monetary::from_decimal_str(USD, ""),
            Err(MonetaryError::EmptyInput)
        );
        assert_eq!(
            Monetary::from_decimal_str(USD, "abc"),
            Err(MonetaryError::InvalidFormat("abc".to_string()))
        );
    }

    #[test]
    fn test_from_decimal_str_negative() {
        assert_eq!(
            Monetary::from_decimal_str(USD, "-1.00"),
            Err(MonetaryError::NegativeAmount)
        );
        assert_eq!(
            Monetary::from_decimal_str(USD, "-0.01"),
            Err(MonetaryError::NegativeAmount)
        );
        // 절사 후 0이면 음수가 아니다
        assert!(Monetary::from_decimal_str(USD, "-0.001").unwrap().is_zero());
    }

    #[test]
    fn test_from_decimal_none_is_absent() {
        let m = Monetary::from_decimal(USD, None);
        assert!(m.amount().is_absent());
        assert_eq!(m.validate(), Err(MonetaryError::NilAmount));
        assert_eq!(m.format_amount(), "nil");
        assert_eq!(m.to_string(), "[USD ($) nil]");
        assert!(m.to_decimal().is_none());
    }

    #[test]
    fn test_from_decimal_does_not_validate() {
        let negative = parse_decimal("-5").unwrap();
        let m = Monetary::from_decimal(USD, Some(&negative));
        assert_eq!(m.amount(), &Amount::from(-500));
        assert_eq!(m.validate(), Err(MonetaryError::NegativeAmount));
    }

    #[test]
    fn test_add() {
        let total = usd("100.50").add(&usd("50.25")).unwrap();
        assert_eq!(total.amount(), &Amount::from(15075));
        assert_eq!(total.format_amount(), "150.75");

        let gbp = Monetary::from_decimal_str(GBP, "100.00").unwrap();
        assert_eq!(
            usd("100.00").add(&gbp),
            Err(MonetaryError::asset_mismatch("USD", "GBP"))
        );
    }

    #[test]
    fn test_add_large() {
        let large: BigInt = "999999999999999999999999999999999999999999".parse().unwrap();
        let m1 = Monetary::from_integer(USD, large).unwrap();
        let m2 = Monetary::from_integer(USD, 1).unwrap();
        let expected: BigInt = "1000000000000000000000000000000000000000000".parse().unwrap();
        assert_eq!(m1.add(&m2).unwrap().amount().value(), Some(&expected));
    }

    #[test]
    fn test_subtract() {
        let result = usd("100.00").subtract(&usd("50.00")).unwrap();
        assert_eq!(result.format_amount(), "50.00");

        assert_eq!(
            usd("100.00").subtract(&usd("200.00")),
            Err(MonetaryError::NegativeAmount)
        );
        assert_eq!(
            usd("0.01").subtract(&usd("100.00")),
            Err(MonetaryError::NegativeAmount)
        );

        let same = usd("100.00").subtract(&usd("100.00")).unwrap();
        assert!(same.is_zero());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(usd("100.00").multiply(2).unwrap().format_amount(), "200.00");
        assert_eq!(usd("100.00").multiply(0).unwrap().format_amount(), "0.00");
        assert_eq!(
            usd("100.00").multiply(-2),
            Err(MonetaryError::NegativeAmount)
        );
        assert_eq!(
            usd("100.00").multiply(Amount::Absent),
            Err(MonetaryError::NilAmount)
        );
    }

    #[test]
    fn test_divide() {
        assert_eq!(usd("100.00").divide(2).unwrap().format_amount(), "50.00");
        assert_eq!(usd("1.00").divide(3).unwrap().format_amount(), "0.33");
        assert_eq!(
            usd("100.00").divide(0),
            Err(MonetaryError::DivisionByZero)
        );
        assert_eq!(
            usd("100.00").divide(-2),
            Err(MonetaryError::NegativeAmount)
        );
        assert_eq!(
            usd("100.00").divide(Amount::Absent),
            Err(MonetaryError::NilAmount)
        );
    }

    #[test]
    fn test_arithmetic_rejects_absent_operand() {
        let absent = Monetary::from_decimal(USD, None);
        assert_eq!(absent.add(&usd("1.00")), Err(MonetaryError::NilAmount));
        assert_eq!(usd("1.00").subtract(&absent), Err(MonetaryError::NilAmount));
        assert_eq!(absent.multiply(2), Err(MonetaryError::NilAmount));
        assert_eq!(absent.divide(2), Err(MonetaryError::NilAmount));
    }

    #[test]
    fn test_arithmetic_does_not_mutate_inputs() {
        let a = usd("10.00");
        let b = usd("2.50");
        let _ = a.add(&b).unwrap();
        let _ = a.subtract(&b).unwrap();
        let _ = a.multiply(3).unwrap();
        assert_eq!(a, usd("10.00"));
        assert_eq!(b, usd("2.50"));
    }

    #[test]
    fn test_comparisons() {
        let usd100 = usd("100.00");
        let usd50 = usd("50.00");
        let gbp100 = Monetary::from_decimal_str(GBP, "100.00").unwrap();

        assert!(usd100.equal(&usd("100.00")));
        assert!(!usd100.equal(&usd50));
        assert!(!usd100.equal(&gbp100));

        assert_eq!(usd100.greater_than(&usd50), Ok(true));
        assert_eq!(usd50.less_than(&usd100), Ok(true));
        assert_eq!(usd100.less_than(&usd100), Ok(false));
        assert_eq!(usd100.compare(&usd("100.00")), Ok(Ordering::Equal));

        assert!(matches!(
            usd100.greater_than(&gbp100),
            Err(MonetaryError::AssetMismatch { .. })
        ));
        assert!(matches!(
            usd100.less_than(&gbp100),
            Err(MonetaryError::AssetMismatch { .. })
        ));
    }

    #[test]
    fn test_comparisons_with_absent_amount() {
        let absent = Monetary::from_decimal(USD, None);

        assert_eq!(absent.greater_than(&usd("1.00")), Err(MonetaryError::NilAmount));
        assert_eq!(usd("1.00").less_than(&absent), Err(MonetaryError::NilAmount));
        assert_eq!(absent.compare(&absent), Err(MonetaryError::NilAmount));

        // 자산 검사가 먼저
        let gbp = Monetary::from_decimal_str(GBP, "1.00").unwrap();
        assert_eq!(
            absent.compare(&gbp),
            Err(MonetaryError::AssetMismatch {
                left: "USD".to_string(),
                right: "GBP".to_string(),
            })
        );
    }

    #[test]
    fn test_formatting() {
        let jpy = Monetary::from_decimal_str(JPY, "1000").unwrap();
        assert_eq!(jpy.format_amount(), "1000");
        assert_eq!(jpy.to_string(), "[JPY (¥) 1000]");

        let eth = Monetary::from_decimal_str(ETH, "1.123456789012345678").unwrap();
        assert_eq!(eth.format_amount(), "1.123456789012345678");

        let btc = Monetary::from_decimal_str(BTC, "0.12345678").unwrap();
        assert_eq!(btc.to_string(), "[BTC (BTC) 0.12345678]");

        let satoshi = Monetary::from_integer(BTC, 1).unwrap();
        assert_eq!(satoshi.to_string(), "[BTC (BTC) 0.00000001]");
        assert_eq!(satoshi, Monetary::from_decimal_str(BTC, "0.00000001").unwrap());
    }

    #[test]
    fn test_decimal_round_trip() {
        let m = usd("123.456789");
        assert_eq!(m.amount(), &Amount::from(12345));
        let back = Monetary::from_decimal(USD, m.to_decimal().as_ref());
        assert_eq!(back, m);

        let jpy = Monetary::from_integer(JPY, 1000).unwrap();
        assert_eq!(jpy.to_decimal().unwrap().to_string(), "1000");
    }

    #[test]
    fn test_rust_decimal_interop() {
        let m = Monetary::from_rust_decimal(USD, dec!(19.99)).unwrap();
        assert_eq!(m.amount(), &Amount::from(1999));
        assert_eq!(m.to_rust_decimal(), Some(dec!(19.99)));

        assert_eq!(
            Monetary::from_rust_decimal(USD, dec!(-1)),
            Err(MonetaryError::NegativeAmount)
        );
    }

    #[test]
    fn test_copy_independence() {
        let original = usd("100.00");
        let copy = original.copy();
        let bumped = original.add(&usd("50.00")).unwrap();

        assert_eq!(copy, usd("100.00"));
        assert_eq!(bumped.format_amount(), "150.00");
    }
}
