//! API module for the healthcare demo service
//!
//! This module contains all HTTP-related functionality.

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::configure;
