pub mod selector;

pub use crate::domain::model::{PlaceDetail, PlaceSummary, SearchFilter, Selection, SelectionRequest};
pub use crate::domain::ports::{ConfigProvider, Geocoder, PlaceDetails, PlaceSearch};
pub use crate::utils::error::Result;
