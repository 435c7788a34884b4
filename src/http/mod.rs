//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, state wiring)
//!     → request.rs (request ID injection)
//!     → handlers.rs (decode name, invoke orchestrator, map errors)
//!     → response (status + body per the error taxonomy)
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
