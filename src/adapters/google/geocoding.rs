use super::wire::{status_ok, GeocodeResponse};
use super::GoogleMapsClient;
use crate::domain::model::Coordinates;
use crate::domain::ports::Geocoder;
use crate::utils::error::{RestaurantError, Result};
use async_trait::async_trait;

#[async_trait]
impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, query: &str) -> Result<Coordinates> {
        let not_found = || RestaurantError::LocationNotFound {
            query: query.to_string(),
        };

        let response: GeocodeResponse = match self
            .get_json("geocode/json", &[("address", query.to_string())])
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Geocoding request for '{}' failed: {}", query, e);
                return Err(not_found());
            }
        };

        if !status_ok(response.status.as_deref()) {
            tracing::warn!(
                "Geocoding returned status {:?} for '{}'",
                response.status,
                query
            );
            return Err(not_found());
        }

        // 多筆結果時只取第一筆
        let location = response
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(not_found)?;

        tracing::debug!("Geocoded '{}' to ({}, {})", query, location.lat, location.lng);
        Ok(Coordinates {
            latitude: location.lat,
            longitude: location.lng,
        })
    }
}
