//! 알려진 자산 카탈로그.
//!
//! 프로세스 전역의 읽기 전용 테이블이며 런타임에 추가/삭제할 수 없습니다.
//! 조회는 대소문자를 구분하지 않는 정확 일치이며 공백을 제거하지 않습니다.

use crate::types::{Asset, AssetClass};

// 법정화폐
pub const BRL: Asset = Asset::from_static("BRL", 2, "R$", AssetClass::Currency);
pub const USD: Asset = Asset::from_static("USD", 2, "$", AssetClass::Currency);
pub const GBP: Asset = Asset::from_static("GBP", 2, "£", AssetClass::Currency);
pub const CHF: Asset = Asset::from_static("CHF", 2, "CHF", AssetClass::Currency);
pub const JPY: Asset = Asset::from_static("JPY", 0, "¥", AssetClass::Currency);
pub const ARS: Asset = Asset::from_static("ARS", 2, "$", AssetClass::Currency);
pub const CLP: Asset = Asset::from_static("CLP", 0, "$", AssetClass::Currency);
pub const CAD: Asset = Asset::from_static("CAD", 2, "$", AssetClass::Currency);
pub const MXN: Asset = Asset::from_static("MXN", 2, "$", AssetClass::Currency);
pub const COP: Asset = Asset::from_static("COP", 2, "$", AssetClass::Currency);

// 암호화폐
pub const BTC: Asset = Asset::from_static("BTC", 8, "BTC", AssetClass::Cryptocurrency);
pub const ETH: Asset = Asset::from_static("ETH", 18, "ETH", AssetClass::Cryptocurrency);
pub const USDT: Asset = Asset::from_static("USDT", 6, "USDT", AssetClass::Cryptocurrency);
pub const USDC: Asset = Asset::from_static("USDC", 6, "USDC", AssetClass::Cryptocurrency);
pub const DAI: Asset = Asset::from_static("DAI", 18, "DAI", AssetClass::Cryptocurrency);
pub const SOL: Asset = Asset::from_static("SOL", 9, "SOL", AssetClass::Cryptocurrency);
pub const TRX: Asset = Asset::from_static("TRX", 6, "TRX", AssetClass::Cryptocurrency);
pub const BNB: Asset = Asset::from_static("BNB", 18, "BNB", AssetClass::Cryptocurrency);
pub const MATIC: Asset = Asset::from_static("MATIC", 18, "MATIC", AssetClass::Cryptocurrency);
pub const AVAX: Asset = Asset::from_static("AVAX", 18, "AVAX", AssetClass::Cryptocurrency);
pub const LINK: Asset = Asset::from_static("LINK", 18, "LINK", AssetClass::Cryptocurrency);
pub const ATOM: Asset = Asset::from_static("ATOM", 6, "ATOM", AssetClass::Cryptocurrency);
pub const DOGE: Asset = Asset::from_static("DOGE", 8, "DOGE", AssetClass::Cryptocurrency);
pub const SHIB: Asset = Asset::from_static("SHIB", 18, "SHIB", AssetClass::Cryptocurrency);

/// 전체 카탈로그. 조회 시 이 순서대로 첫 번째 일치 항목을 반환합니다.
pub static ALL_ASSETS: [Asset; 24] = [
    BRL, USD, GBP, CHF, JPY, ARS, CLP, CAD, MXN, COP, BTC, ETH, USDT, USDC, DAI, SOL, TRX, BNB,
    MATIC, AVAX, LINK, ATOM, DOGE, SHIB,
];

/// 표시 기호로 자산을 찾습니다.
///
/// 여러 자산이 같은 기호를 쓰는 경우(예: `$`) 카탈로그 순서상 첫 번째를 반환합니다.
pub fn find_by_symbol(symbol: &str) -> Option<&'static Asset> {
    ALL_ASSETS
        .iter()
        .find(|asset| eq_ignore_case(asset.symbol(), symbol))
}

/// 자산 코드로 자산을 찾습니다.
pub fn find_by_name(name: &str) -> Option<&'static Asset> {
    ALL_ASSETS
        .iter()
        .find(|asset| eq_ignore_case(asset.code(), name))
}

/// 법정화폐 자산 목록.
pub fn currencies() -> impl Iterator<Item = &'static Asset> {
    by_class(AssetClass::Currency)
}

/// 암호화폐 자산 목록.
pub fn cryptocurrencies() -> impl Iterator<Item = &'static Asset> {
    by_class(AssetClass::Cryptocurrency)
}

fn by_class(class: AssetClass) -> impl Iterator<Item = &'static Asset> {
    ALL_ASSETS.iter().filter(move |asset| asset.class() == &class)
}

/// 유니코드 대소문자 무시 비교.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
