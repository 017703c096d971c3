pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::google::GoogleMapsClient;
pub use config::Settings;
pub use core::selector::RestaurantSelector;
pub use domain::model::{Coordinates, DistanceUnit, PlaceDetail, PlaceSummary, SearchFilter, Selection, SelectionRequest};
pub use utils::error::{RestaurantError, Result};
