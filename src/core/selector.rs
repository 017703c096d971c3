use crate::core::{Geocoder, PlaceDetails, PlaceSearch, Result};
use crate::domain::hours::{closing_time, day_name};
use crate::domain::model::{PlaceSummary, Selection, SelectionRequest};
use crate::domain::price::{level_to_symbol, NOT_AVAILABLE};
use crate::utils::error::RestaurantError;
use chrono::{Datelike, Local, Weekday};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

/// Geocode → search → random pick → details → format, once per call.
pub struct RestaurantSelector<G: Geocoder, S: PlaceSearch, D: PlaceDetails> {
    geocoder: G,
    search: S,
    details: D,
    rng: Mutex<StdRng>,
}

impl<G: Geocoder, S: PlaceSearch, D: PlaceDetails> RestaurantSelector<G, S, D> {
    pub fn new(geocoder: G, search: S, details: D) -> Self {
        Self {
            geocoder,
            search,
            details,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 固定亂數種子，讓測試結果可重現
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub async fn run(&self, request: &SelectionRequest) -> Result<Selection> {
        self.run_on(request, Local::now().weekday()).await
    }

    /// Same as [`run`](Self::run) with the day used for the closing-time lookup
    /// supplied by the caller.
    pub async fn run_on(&self, request: &SelectionRequest, today: Weekday) -> Result<Selection> {
        tracing::info!("Geocoding '{}'", request.postal_code);
        let center = self.geocoder.geocode(&request.postal_code).await?;

        tracing::info!(
            "Searching restaurants within {:.2} m of ({}, {})",
            request.filter.radius_meters(),
            center.latitude,
            center.longitude
        );
        let candidates = self.search.search(center, &request.filter).await;
        tracing::info!("Found {} candidates", candidates.len());

        let chosen = self
            .pick(&candidates)
            .ok_or(RestaurantError::NoCandidates {
                radius_meters: request.filter.radius_meters(),
            })?;
        tracing::info!("Picked '{}' ({})", chosen.name, chosen.id);

        let detail = self.details.fetch_detail(&chosen.id).await;
        if detail.is_none() {
            tracing::warn!("No details for '{}', using placeholders", chosen.name);
        }

        let closing = detail
            .as_ref()
            .and_then(|d| d.weekly_hours.as_deref())
            .and_then(|hours| closing_time(hours, day_name(today)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let price_range = level_to_symbol(detail.as_ref().and_then(|d| d.price_level));

        Ok(Selection {
            name: chosen.name.clone(),
            address: chosen.address.clone(),
            price_range,
            closing_time: closing,
        })
    }

    fn pick<'a>(&self, candidates: &'a [PlaceSummary]) -> Option<&'a PlaceSummary> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        candidates.choose(&mut *rng)
    }
}
