//! HTTP API layer: error mapping, routing, handlers, and the server loop.

pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::{build_router, ApiState};
pub use server::start_api_server;
