//! Pokemon Shakespeare Description Service Library

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod service;
pub mod upstream;

pub use config::schema::ServiceConfig;
pub use error::ServiceError;
pub use http::HttpServer;
pub use service::DescriptionService;
