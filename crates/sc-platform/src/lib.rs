//! # sc-platform
//!
//! Platform adapters and watch runtimes for sysclip: OS clipboard
//! backends, appearance preference sources, and the event loop bridging
//! external changes into the in-process notification bus.

pub mod adapters;
pub mod ipc;
pub mod ports;
pub mod runtime;
