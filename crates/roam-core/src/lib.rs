//! roam-core - Core types for the Roam geofencing client.
//!
//! This crate provides the wire records, error taxonomy, client options and
//! the transport seam shared by `roam-client` and anything that wants to
//! stand in for its HTTP stack.
//!
//! # Example
//!
//! ```ignore
//! use roam_core::{Hook, Notification, Point};
//!
//! let point = Point::new(33.5, -112.1, "bike1").with_meta("red");
//! let hook = Hook::new("fence1", "100", "bike*", "https://example.com/hook");
//!
//! // Inside your own webhook handler
//! let event = Notification::from_json(&body)?;
//! ```

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{ClientOptions, ClientOptionsBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{ErrorCode, RoamError, RoamResult};
pub use traits::{ApiRequest, ApiResponse, Transport};
pub use types::{Hook, NearBy, Notification, Object, Point};
