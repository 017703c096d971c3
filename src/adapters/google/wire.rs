//! JSON shapes returned by the Google Maps web services. Only the fields the
//! pipeline reads are declared; everything else is ignored by serde.

use serde::Deserialize;

pub const STATUS_OK: &str = "OK";

pub fn status_ok(status: Option<&str>) -> bool {
    status.map_or(true, |s| s == STATUS_OK)
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
}

#[derive(Debug, Deserialize)]
pub struct NearbyPlace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vicinity: String,
    pub place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: Option<String>,
    pub result: Option<PlaceDetailsResult>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResult {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub price_level: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    pub weekday_text: Option<Vec<String>>,
}
