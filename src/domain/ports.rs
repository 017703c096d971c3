use crate::domain::model::{Coordinates, PlaceDetail, PlaceSummary, SearchFilter};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First match wins. Any failure is `RestaurantError::LocationNotFound`.
    async fn geocode(&self, query: &str) -> Result<Coordinates>;
}

#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Fails open: errors and zero results both come back empty.
    async fn search(&self, center: Coordinates, filter: &SearchFilter) -> Vec<PlaceSummary>;
}

#[async_trait]
pub trait PlaceDetails: Send + Sync {
    async fn fetch_detail(&self, id: &str) -> Option<PlaceDetail>;
}
