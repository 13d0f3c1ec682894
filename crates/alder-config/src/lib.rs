//! Typed build configuration for the Alder bundler.
//!
//! This crate owns the declarative [`BuildConfig`] object the engine
//! consumes and the resolver that produces it from environment inputs
//! (the serve flag and a snapshot of the process environment). It performs
//! no I/O of its own beyond reading that snapshot; bundling, compilation
//! and dev-server proxying all live in the engine crates.

pub mod config;
pub mod dev;
pub mod error;
pub mod resolve;
pub mod rules;

// Re-export main types
pub use config::*;
pub use dev::*;
pub use error::*;
pub use rules::*;

// Re-export the resolver surface
pub use resolve::{resolve, Environment, BACKEND_VAR, PING_PREFIX};
