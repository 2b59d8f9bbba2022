//! # busbay-server
//!
//! HTTP server library for the busbay college bus service.
//!
//! This library provides the API handlers and state management for busbay.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod api;
pub mod logging;
pub mod state;
