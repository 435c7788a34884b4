//! Request orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! name
//!     → engine.rs (validate, read-through description cache)
//!     → selector.rs (pick one candidate)
//!     → engine.rs (read-through translation cache)
//!     → Pokemon { name, description }
//! ```

pub mod engine;
pub mod selector;

pub use engine::{DescriptionService, DescriptionSource, Pokemon, Translator};
pub use selector::{CandidateSelector, RandomSelector};
