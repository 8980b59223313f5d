//! REST API client module for the upstream band directory.
//!
//! This module provides the `ApiClient` for fetching the four upstream
//! resources: artists, locations, dates and relations. The last three are
//! wrapped in an `{ "index": [...] }` envelope which the client unwraps.
//!
//! The API is public and unauthenticated. Every call is a single GET with
//! no retry.

pub mod client;
pub mod error;
pub mod resource;

pub use client::ApiClient;
pub use error::ApiError;
pub use resource::Resource;
