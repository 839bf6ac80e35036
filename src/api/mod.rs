//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into mapping service calls and renders the
//! results.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and request deadline layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
