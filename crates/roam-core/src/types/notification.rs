//! Notification payloads delivered by the service to hook endpoints.
//!
//! The client never builds these; they exist so a caller's own webhook
//! receiver can parse what the service sends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RoamError, RoamResult};

/// A typed geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Object {
    /// Geometry type tag, e.g. `Point`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinates in GeoJSON order (longitude first).
    pub coordinates: Vec<f64>,
}

impl Object {
    /// Create a point geometry.
    pub fn point(lat: f64, lon: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![lon, lat],
        }
    }

    /// Latitude of a point geometry.
    pub fn lat(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }

    /// Longitude of a point geometry.
    pub fn lon(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }
}

/// The nearby object that triggered a proximity notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearBy {
    /// Id of the nearby point.
    pub id: String,
    /// Geometry of the nearby point.
    pub object: Object,
    /// Distance in meters.
    pub meters: f64,
}

/// A geofence event as POSTed by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub uid: String,
    pub service: String,
    /// Name of the hook that fired.
    pub hook: String,
    /// RFC 3339 event time.
    pub time: String,
    /// Id of the point that moved.
    pub id: String,
    pub object: Object,
    /// Present for proximity events only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby: Option<NearBy>,
}

impl Notification {
    /// Parse a notification from a JSON payload.
    pub fn from_json(payload: &str) -> RoamResult<Self> {
        serde_json::from_str(payload).map_err(|e| RoamError::decode(e, None))
    }

    /// Parse a notification from raw payload bytes.
    pub fn from_slice(payload: &[u8]) -> RoamResult<Self> {
        serde_json::from_slice(payload).map_err(|e| RoamError::decode(e, None))
    }

    /// Whether this is a proximity event.
    pub fn is_proximity(&self) -> bool {
        self.nearby.is_some()
    }

    /// Event time as UTC.
    pub fn timestamp(&self) -> RoamResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.time)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| {
                RoamError::invalid_timestamp(format!("invalid notification time '{}': {}", self.time, e))
            })
    }
}
