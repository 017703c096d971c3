use crate::utils::error::{RestaurantError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_AVAILABLE: &str = "Not available";

pub const MAX_PRICE_LEVEL: u8 = 4;

/// 使用者輸入的價格區間最多四個 `$`
pub const MAX_TIER_SYMBOLS: usize = 4;

/// Google 的 price_level：0（最便宜）到 4（最貴）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub fn new(level: u8) -> Option<Self> {
        (level <= MAX_PRICE_LEVEL).then_some(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn symbol(self) -> String {
        "$".repeat(usize::from(self.0) + 1)
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("price level {} is outside 0..=4", level))
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `"$"` → 0，`"$$"` → 1，依此類推；空字串代表不設限，回傳 `None`。
///
/// 其他字元或超過 `MAX_TIER_SYMBOLS` 個 `$` 一律拒絕，不做截斷。
pub fn symbol_to_level(symbol: &str) -> Result<Option<PriceLevel>> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Ok(None);
    }

    if let Some(bad) = symbol.chars().find(|c| *c != '$') {
        return Err(RestaurantError::InvalidPriceTier {
            value: symbol.to_string(),
            reason: format!("unexpected character '{}'", bad),
        });
    }

    let count = symbol.chars().count();
    if count > MAX_TIER_SYMBOLS {
        return Err(RestaurantError::InvalidPriceTier {
            value: symbol.to_string(),
            reason: format!("at most {} '$' characters allowed", MAX_TIER_SYMBOLS),
        });
    }

    u8::try_from(count - 1)
        .ok()
        .and_then(PriceLevel::new)
        .map(Some)
        .ok_or_else(|| RestaurantError::InvalidPriceTier {
            value: symbol.to_string(),
            reason: format!("price level above {}", MAX_PRICE_LEVEL),
        })
}

/// Render a raw level from the service. Missing or out-of-range values
/// become the "Not available" marker.
pub fn level_to_symbol(level: Option<i64>) -> String {
    level
        .and_then(|l| u8::try_from(l).ok())
        .and_then(PriceLevel::new)
        .map(PriceLevel::symbol)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
