//! 자산과 금액 표현에 사용되는 공통 타입.

mod amount;
mod asset;
pub mod decimal;

pub use amount::*;
pub use asset::*;
