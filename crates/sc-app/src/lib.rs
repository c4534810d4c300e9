//! # sc-app
//!
//! Application layer for sysclip: the clipboard and appearance service
//! facades a GUI shell consumes, and the use cases they orchestrate.

pub mod service;
pub mod usecases;

pub use service::{AppearanceService, PreferenceStream, SystemClipboardService};
