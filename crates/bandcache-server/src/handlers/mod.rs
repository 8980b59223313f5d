//! Request handlers.
//!
//! - [`pages`]: server-rendered HTML (`/`, `/artist/:id`, error pages)
//! - [`api`]: JSON endpoints (`/filter`, `/concerts/data`, `/health`)

pub mod api;
pub mod pages;
