#[cfg(feature = "cli")]
pub mod cli;
pub mod prompt;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{DistanceUnit, SearchFilter, SelectionRequest};
use crate::utils::error::{RestaurantError, Result};
use crate::utils::validation::{self, Validate};
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Fully resolved run settings: command line, then config file, then prompts.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub postal_code: String,
    pub radius: f64,
    pub unit: DistanceUnit,
    pub open_now: bool,
    pub min_price: String,
    pub max_price: String,
}

impl Settings {
    pub fn search_filter(&self) -> Result<SearchFilter> {
        SearchFilter::from_input(
            self.radius,
            self.unit,
            self.open_now,
            &self.min_price,
            &self.max_price,
        )
    }

    pub fn selection_request(&self) -> Result<SelectionRequest> {
        Ok(SelectionRequest {
            postal_code: self.postal_code.trim().to_string(),
            filter: self.search_filter()?,
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        if toml_config::has_unresolved_placeholder(&self.api_key) {
            return Err(RestaurantError::MissingConfigError {
                field: "api_key (environment variable not set)".to_string(),
            });
        }
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_non_empty_string("zip_code", &self.postal_code)?;

        // 半徑、價格區間的檢查都在 SearchFilter 內
        self.search_filter().map(|_| ())
    }
}

impl ConfigProvider for Settings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}
