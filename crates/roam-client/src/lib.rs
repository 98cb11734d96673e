//! roam-client - Client library for the Roam geofencing API.
//!
//! This crate provides a client for registering points and geofence hooks
//! with the hosted Roam service.
//!
//! # Example
//!
//! ```ignore
//! use roam_client::{ClientOptions, Hook, Point, RoamClient};
//! use std::time::Duration;
//!
//! let options = ClientOptions::builder()
//!     .timeout(Duration::from_secs(10))
//!     .user_agent("fleet-tracker/1.0")
//!     .build();
//! let client = RoamClient::with_options("your-token", options);
//!
//! // Register a fence around every bike
//! client.set_hook(&Hook::new("bikes", "100", "bike*", "https://example.com/hook")).await?;
//!
//! // Move a bike
//! let ok = client.set_point(&Point::new(33.5, -112.1, "bike1")).await?;
//! ```

mod client;
mod http;

pub use client::RoamClient;
pub use http::HttpTransport;
pub use roam_core::config::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use roam_core::error::{ErrorCode, RoamError, RoamResult};
pub use roam_core::traits::{ApiRequest, ApiResponse, Transport};
pub use roam_core::types::{Hook, NearBy, Notification, Object, Point};
