//! Trait definitions for external boundaries

pub mod input;

pub use input::InputPort;
