//! Upstream provider clients.
//!
//! # Data Flow
//! ```text
//! name
//!     → pokeapi.rs (GET pokemon, follow species URL, filter flavor texts)
//!     → candidate descriptions
//!     → shakespeare.rs (POST text, extract translation)
//!     → translated description
//! ```
//!
//! # Design Decisions
//! - Both clients share one reqwest::Client; its connect/response timeouts
//!   are the only latency bound on upstream calls
//! - HTTP status classification returns typed errors instead of panicking
//!   or bubbling raw status codes
//! - No retries; the orchestration layer's cache policy makes a plain
//!   re-request from the caller the retry mechanism

pub mod pokeapi;
pub mod shakespeare;

pub use pokeapi::PokeApiClient;
pub use shakespeare::ShakespeareClient;
