//! Helperville puzzle backend library.
//!
//! The binary in `main.rs` wires these modules to a TCP listener; the
//! library target exists so integration tests can build the router directly.

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod policy;
pub mod pool;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod telemetry;
