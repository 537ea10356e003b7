//! Detail screen view model
//!
//! Coordinates are handed to the map collaborator unchanged; the region
//! is just a centre plus a fixed zoom span.

use crate::domain::entity::{Coordinates, Entity, EntityId};
use crate::domain::review::Review;
use crate::platform::CommentSource;

/// Visible map area centred on an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Street-level span used for the detail pin
    pub const PIN_SPAN: f64 = 0.001;

    pub fn around(center: Coordinates) -> Self {
        Self {
            center,
            latitude_delta: Self::PIN_SPAN,
            longitude_delta: Self::PIN_SPAN,
        }
    }
}

/// Everything the detail screen renders
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolDetail {
    pub id: EntityId,
    pub title: String,
    pub subtitle: String,
    pub region: MapRegion,
    pub marker_description: String,
    pub average_rating: Option<f32>,
    pub comments: Vec<Review>,
}

impl SchoolDetail {
    pub fn new(entity: &Entity, comments: &impl CommentSource) -> Self {
        let Coordinates {
            latitude,
            longitude,
        } = entity.coordinates;

        Self {
            id: entity.id.clone(),
            title: entity.name.clone(),
            subtitle: format!("Ville: {}", entity.locality),
            region: MapRegion::around(entity.coordinates),
            marker_description: format!("Latitude: {latitude}, Longitude: {longitude}"),
            average_rating: comments.average_rating(&entity.id),
            comments: comments.load_comments(&entity.id),
        }
    }
}
