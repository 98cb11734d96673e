//! Geofence hook types.

use serde::{Deserialize, Serialize};

/// A named geofence registration.
///
/// Every point whose id matches `match_pattern` becomes the center of a fence
/// of radius `meters`; events are POSTed by the service to `endpoint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    /// Name of the geofence. Registering an existing name overwrites it.
    pub name: String,
    /// Radius in meters, as text.
    pub meters: String,
    /// Glob pattern matched against point ids.
    #[serde(rename = "match")]
    pub match_pattern: String,
    /// HTTP URL receiving notifications.
    pub endpoint: String,
    /// Optional glob restricting which target point ids trigger notifications.
    pub filter: String,
}

impl Hook {
    /// Create a new hook without a filter.
    pub fn new(
        name: impl Into<String>,
        meters: impl Into<String>,
        match_pattern: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            meters: meters.into(),
            match_pattern: match_pattern.into(),
            endpoint: endpoint.into(),
            filter: String::new(),
        }
    }

    /// Set the target filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}
