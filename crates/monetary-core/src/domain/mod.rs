//! 자산 카탈로그와 금액 엔진.

mod monetary;
pub mod registry;
mod wire;

pub use monetary::*;
pub use registry::*;
pub use wire::*;
