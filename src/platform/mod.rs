//! Platform abstraction layer
//!
//! Turns raw host events (or the demo AI) into simulation input.

pub mod autopilot;
pub mod input;

pub use input::KeyState;
