//! Point types.

use serde::{Deserialize, Serialize};

/// An identified geographic coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Identifier of the point; setting a point with an existing id overwrites it.
    pub id: String,
    /// Optional metadata returned with every notification. The service caps it
    /// at 256 characters. Empty means absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub meta: String,
}

impl Point {
    /// Create a new point without metadata.
    pub fn new(lat: f64, lon: f64, id: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            id: id.into(),
            meta: String::new(),
        }
    }

    /// Set the metadata.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    /// Whether metadata will be sent with this point.
    pub fn has_meta(&self) -> bool {
        !self.meta.is_empty()
    }
}
