//! Browser capabilities the provider map depends on.
//!
//! `ProviderMap` only talks to these traits, so the bootstrap, fetch and
//! fullscreen logic runs against in-memory fakes in unit tests.

use async_trait::async_trait;
use contracts::domain::a004_provider::nearby::{NearbyProvidersResponse, NearbyQuery};
use thiserror::Error;

use super::model::{GeoPoint, GeolocationOptions, MarkerSpec};
use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("script {0} failed to load")]
    ScriptLoad(String),
    #[error("{0}")]
    Construction(String),
    #[error("marker could not be placed: {0}")]
    Marker(String),
    #[error("fullscreen request rejected: {0}")]
    Fullscreen(String),
}

#[async_trait(?Send)]
pub trait MapPlatform {
    /// Live map object.
    type Map;
    /// Marker placed on a map; removed through `remove_marker`.
    type Marker;

    /// `true` when the mapping library is already available globally.
    fn maps_library_present(&self) -> bool;

    async fn load_external_script(&self, src: &str) -> Result<(), MapError>;

    /// Current position, or `None` when unsupported, denied or failed.
    async fn current_location(&self, options: GeolocationOptions) -> Option<GeoPoint>;

    fn create_map(&self, center: GeoPoint, zoom: u8) -> Result<Self::Map, MapError>;

    fn place_marker(&self, map: &Self::Map, spec: &MarkerSpec) -> Result<Self::Marker, MapError>;

    fn remove_marker(&self, marker: &Self::Marker);

    fn set_center(&self, map: &Self::Map, center: GeoPoint);

    fn request_fullscreen(&self) -> Result<(), MapError>;

    fn exit_fullscreen(&self) -> Result<(), MapError>;

    /// `true` when this map's own element is the document's fullscreen element.
    fn owns_fullscreen(&self) -> bool;
}

/// Where nearby providers come from.
#[async_trait(?Send)]
pub trait NearbyProviderSource {
    async fn nearby(&self, query: &NearbyQuery) -> Result<NearbyProvidersResponse, ApiError>;
}
