//! UCI (Universal Chess Interface) Protocol
//!
//! Host front-end that keeps the game record and hands each turn to the engine.

pub mod protocol;

pub use protocol::{go_to_limits, GoLimits, UCI};
