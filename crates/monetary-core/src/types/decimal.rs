//! 최소 단위 정수와 10진수 사이의 정밀 변환.
//!
//! 이진 부동소수점을 거치지 않고 `BigDecimal`로 직접 변환하므로
//! 18자리 정밀도 자산에서도 오차가 생기지 않습니다.

use crate::error::{MonetaryError, MonetaryResult};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Signed;
use std::str::FromStr;

/// 10의 거듭제곱을 계산합니다.
pub(crate) fn pow10(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// 10진수 문자열을 파싱합니다.
///
/// 허용 형식: 선택적 부호, 정수부, 선택적 소수부 (`[+-]?\d*(\.\d*)?`, 숫자 최소 1개).
/// 천 단위 구분자, 지수 표기, 앞뒤 공백은 허용하지 않습니다.
pub fn parse_decimal(text: &str) -> MonetaryResult<BigDecimal> {
    if text.is_empty() {
        return Err(MonetaryError::EmptyInput);
    }

    let invalid = || MonetaryError::InvalidFormat(text.to_string());

    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }

    let mut digits =
        BigInt::from_str(&format!("{}{}", int_part, frac_part)).map_err(|_| invalid())?;
    if negative {
        digits = -digits;
    }
    Ok(BigDecimal::new(digits, frac_part.len() as i64))
}

/// 10진수 값을 최소 단위 정수로 변환합니다 (`value * 10^precision`, 0 방향 절사).
pub fn decimal_to_units(value: &BigDecimal, precision: u32) -> BigInt {
    // value = digits * 10^-scale
    let (digits, scale) = value.as_bigint_and_exponent();
    let shift = i64::from(precision) - scale;

    if shift >= 0 {
        digits * pow10(shift.unsigned_abs())
    } else {
        // BigInt 나눗셈은 0 방향으로 절사합니다
        digits / pow10(shift.unsigned_abs())
    }
}

/// 최소 단위 정수를 10진수 값으로 변환합니다 (`units / 10^precision`).
pub fn units_to_decimal(units: &BigInt, precision: u32) -> BigDecimal {
    BigDecimal::new(units.clone(), i64::from(precision))
}

/// 최소 단위 정수를 고정 소수점 문자열로 포맷합니다.
///
/// 정밀도가 0이면 정수 그대로, 그 외에는 정확히 `precision`자리의 소수부를 가집니다.
/// 뒤쪽 0을 제거하지 않으며 지수 표기를 사용하지 않습니다.
pub fn format_units(units: &BigInt, precision: u32) -> String {
    if precision == 0 {
        return units.to_string();
    }

    let width = precision as usize;
    let mut digits = units.abs().to_string();
    if digits.len() <= width {
        digits.insert_str(0, &"0".repeat(width + 1 - digits.len()));
    }

    let (int_part, frac_part) = digits.split_at(digits.len() - width);
    let sign = if units.is_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, int_part, frac_part)
}

/// `rust_decimal::Decimal`을 `BigDecimal`로 정확하게 변환합니다.
pub fn from_rust_decimal(value: rust_decimal::Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}

/// 최소 단위 정수를 `rust_decimal::Decimal`로 변환합니다.
///
/// 96비트 가수나 28자리 소수 범위를 넘으면 `None`을 반환합니다.
pub fn units_to_rust_decimal(units: &BigInt, precision: u32) -> Option<rust_decimal::Decimal> {
    let mantissa = i128::try_from(units).ok()?;
    rust_decimal::Decimal::try_from_i128_with_scale(mantissa, precision).ok()
}
