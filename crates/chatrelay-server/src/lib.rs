//! chatrelay-server
//!
//! HTTP surface of the relay: `/health`, `/s3-test` and `/chat`.

pub mod aws;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
