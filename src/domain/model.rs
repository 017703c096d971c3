use crate::domain::price::{self, PriceLevel};
use crate::utils::error::{RestaurantError, Result};
use crate::utils::validation::validate_positive_f64;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const METERS_PER_MILE: f64 = 1609.34;

/// Nearby Search 允許的最大半徑（公尺）
pub const MAX_RADIUS_METERS: f64 = 50_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    pub name: String,
    pub address: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub address: Option<String>,
    pub weekly_hours: Option<Vec<String>>,
    pub price_level: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Meters,
}

impl DistanceUnit {
    pub fn to_meters(self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Miles => distance * METERS_PER_MILE,
            DistanceUnit::Meters => distance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Meters => "meters",
        }
    }
}

/// Search constraints for one run. Price bounds are `None` when unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    radius_meters: f64,
    open_now: bool,
    min_price_level: Option<PriceLevel>,
    max_price_level: Option<PriceLevel>,
}

impl SearchFilter {
    pub fn new(
        radius_meters: f64,
        open_now: bool,
        min_price_level: Option<PriceLevel>,
        max_price_level: Option<PriceLevel>,
    ) -> Result<Self> {
        validate_positive_f64("radius", radius_meters)?;
        if radius_meters > MAX_RADIUS_METERS {
            return Err(RestaurantError::InvalidConfigValueError {
                field: "radius".to_string(),
                value: format!("{:.2} meters", radius_meters),
                reason: format!("Radius cannot exceed {} meters", MAX_RADIUS_METERS),
            });
        }

        if let (Some(min), Some(max)) = (min_price_level, max_price_level) {
            if min > max {
                return Err(RestaurantError::InvalidConfigValueError {
                    field: "min_price".to_string(),
                    value: min.symbol(),
                    reason: format!("Minimum price is above maximum price {}", max.symbol()),
                });
            }
        }

        Ok(Self {
            radius_meters,
            open_now,
            min_price_level,
            max_price_level,
        })
    }

    /// 從使用者輸入建立：距離帶單位，價格用 `$` 符號
    pub fn from_input(
        radius: f64,
        unit: DistanceUnit,
        open_now: bool,
        min_price: &str,
        max_price: &str,
    ) -> Result<Self> {
        validate_positive_f64("radius", radius)?;
        Self::new(
            unit.to_meters(radius),
            open_now,
            price::symbol_to_level(min_price)?,
            price::symbol_to_level(max_price)?,
        )
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    pub fn open_now(&self) -> bool {
        self.open_now
    }

    pub fn min_price_level(&self) -> Option<PriceLevel> {
        self.min_price_level
    }

    pub fn max_price_level(&self) -> Option<PriceLevel> {
        self.max_price_level
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRequest {
    pub postal_code: String,
    pub filter: SearchFilter,
}

/// The formatted outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub address: String,
    pub price_range: String,
    pub closing_time: String,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selected Restaurant: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Price Range: {}", self.price_range)?;
        write!(f, "Closing Time: {}", self.closing_time)
    }
}
