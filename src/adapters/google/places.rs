use super::wire::{status_ok, NearbySearchResponse, PlaceDetailsResponse};
use super::GoogleMapsClient;
use crate::domain::model::{Coordinates, PlaceDetail, PlaceSummary, SearchFilter};
use crate::domain::ports::{PlaceDetails, PlaceSearch};
use async_trait::async_trait;

pub const PLACE_TYPE: &str = "restaurant";
pub const DETAIL_FIELDS: &str = "name,formatted_address,opening_hours,price_level";

/// Query parameters for a nearby search; optional filters are only present
/// when set.
pub fn nearby_search_params(center: Coordinates, filter: &SearchFilter) -> Vec<(&'static str, String)> {
    let mut params = vec![
        (
            "location",
            format!("{},{}", center.latitude, center.longitude),
        ),
        ("radius", filter.radius_meters().to_string()),
        ("type", PLACE_TYPE.to_string()),
    ];

    if filter.open_now() {
        params.push(("opennow", "true".to_string()));
    }
    if let Some(min) = filter.min_price_level() {
        params.push(("minprice", min.to_string()));
    }
    if let Some(max) = filter.max_price_level() {
        params.push(("maxprice", max.to_string()));
    }

    params
}

#[async_trait]
impl PlaceSearch for GoogleMapsClient {
    async fn search(&self, center: Coordinates, filter: &SearchFilter) -> Vec<PlaceSummary> {
        let params = nearby_search_params(center, filter);
        let response: NearbySearchResponse =
            match self.get_json("place/nearbysearch/json", &params).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Nearby search failed, treating as no results: {}", e);
                    return Vec::new();
                }
            };

        if !status_ok(response.status.as_deref()) {
            tracing::warn!("Nearby search returned status {:?}", response.status);
            return Vec::new();
        }

        let places: Vec<PlaceSummary> = response
            .results
            .into_iter()
            .filter_map(|place| {
                let id = place.place_id?;
                Some(PlaceSummary {
                    name: place.name,
                    address: place.vicinity,
                    id,
                })
            })
            .collect();

        tracing::debug!("Nearby search returned {} candidates", places.len());
        places
    }
}

#[async_trait]
impl PlaceDetails for GoogleMapsClient {
    async fn fetch_detail(&self, id: &str) -> Option<PlaceDetail> {
        let params = [
            ("place_id", id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
        ];

        let response: PlaceDetailsResponse = match self.get_json("place/details/json", &params).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Place details for {} unavailable: {}", id, e);
                return None;
            }
        };

        if !status_ok(response.status.as_deref()) {
            tracing::warn!("Place details returned status {:?} for {}", response.status, id);
            return None;
        }

        let result = response.result?;
        Some(PlaceDetail {
            name: result.name,
            address: result.formatted_address,
            weekly_hours: result.opening_hours.and_then(|hours| hours.weekday_text),
            price_level: result.price_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::google::test_support::MockConfig;
    use crate::domain::model::DistanceUnit;
    use httpmock::prelude::*;

    fn center() -> Coordinates {
        Coordinates {
            latitude: 37.77,
            longitude: -122.41,
        }
    }

    #[test]
    fn test_params_without_filters() {
        let filter = SearchFilter::from_input(1.0, DistanceUnit::Miles, false, "", "").unwrap();
        let params = nearby_search_params(center(), &filter);

        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["location", "radius", "type"]);
        assert_eq!(params[0].1, "37.77,-122.41");
        assert_eq!(params[2].1, "restaurant");
        // 空的價格區間不能變成 -1
        assert!(params.iter().all(|(_, v)| v != "-1"));
    }

    #[test]
    fn test_params_with_filters() {
        let filter = SearchFilter::from_input(500.0, DistanceUnit::Meters, true, "$", "$$$").unwrap();
        let params = nearby_search_params(center(), &filter);

        assert!(params.contains(&("radius", "500".to_string())));
        assert!(params.contains(&("opennow", "true".to_string())));
        assert!(params.contains(&("minprice", "0".to_string())));
        assert!(params.contains(&("maxprice", "2".to_string())));
    }

    #[tokio::test]
    async fn test_search_maps_results() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("type", "restaurant")
                .query_param("location", "37.77,-122.41")
                .query_param("maxprice", "1");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [
                    {"name": "Pizza Place", "vicinity": "123 Main St", "place_id": "id1"},
                    {"name": "Taco Stand", "vicinity": "9 Mission St", "place_id": "id2"},
                    {"name": "No Id Diner", "vicinity": "1 Nowhere"}
                ]
            }));
        });

        let client = GoogleMapsClient::new(&MockConfig::new(server.base_url())).unwrap();
        let filter = SearchFilter::from_input(1.0, DistanceUnit::Miles, false, "", "$$").unwrap();
        let places = client.search(center(), &filter).await;

        api_mock.assert();
        assert_eq!(places.len(), 2);
        assert_eq!(
            places[0],
            PlaceSummary {
                name: "Pizza Place".to_string(),
                address: "123 Main St".to_string(),
                id: "id1".to_string(),
            }
        );
        assert_eq!(places[1].id, "id2");
    }

    #[tokio::test]
    async fn test_search_fails_open() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/place/nearbysearch/json");
            then.status(503);
        });

        let client = GoogleMapsClient::new(&MockConfig::new(server.base_url())).unwrap();
        let filter = SearchFilter::from_input(1.0, DistanceUnit::Miles, false, "", "").unwrap();

        assert!(client.search(center(), &filter).await.is_empty());
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_search_malformed_body_fails_open() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/place/nearbysearch/json");
            then.status(200).body("not json");
        });

        let client = GoogleMapsClient::new(&MockConfig::new(server.base_url())).unwrap();
        let filter = SearchFilter::from_input(1.0, DistanceUnit::Miles, false, "", "").unwrap();

        assert!(client.search(center(), &filter).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_detail() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/place/details/json")
                .query_param("place_id", "id1")
                .query_param("fields", DETAIL_FIELDS);
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "result": {
                    "name": "Pizza Place",
                    "formatted_address": "123 Main St, San Francisco, CA 94103, USA",
                    "opening_hours": {
                        "open_now": true,
                        "weekday_text": ["Monday: 9:00 AM – 10:00 PM"]
                    },
                    "price_level": 1
                }
            }));
        });

        let client = GoogleMapsClient::new(&MockConfig::new(server.base_url())).unwrap();
        let detail = client.fetch_detail("id1").await.unwrap();

        api_mock.assert();
        assert_eq!(detail.name.as_deref(), Some("Pizza Place"));
        assert_eq!(detail.price_level, Some(1));
        assert_eq!(
            detail.weekly_hours,
            Some(vec!["Monday: 9:00 AM – 10:00 PM".to_string()])
        );
    }

    #[tokio::test]
    async fn test_fetch_detail_partial_and_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/place/details/json")
                .query_param("place_id", "partial");
            then.status(200)
                .json_body(serde_json::json!({"status": "OK", "result": {"name": "Bare"}}));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/place/details/json")
                .query_param("place_id", "gone");
            then.status(200)
                .json_body(serde_json::json!({"status": "NOT_FOUND"}));
        });

        let client = GoogleMapsClient::new(&MockConfig::new(server.base_url())).unwrap();

        let partial = client.fetch_detail("partial").await.unwrap();
        assert_eq!(partial.weekly_hours, None);
        assert_eq!(partial.price_level, None);

        assert!(client.fetch_detail("gone").await.is_none());
    }
}
