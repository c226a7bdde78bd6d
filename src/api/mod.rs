//! Fruit Slot HTTP API
//!
//! JSON endpoints for single and batch plays.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::{build_app, with_middleware, ApiServer};
