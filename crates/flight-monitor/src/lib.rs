//! # Flight Monitor
//!
//! Orchestration layer for flight image monitoring: drives a vision model
//! through an ordered image sequence, normalizes every reply, and builds
//! the session report.
//!
//! ## Features
//!
//! - Vision-model trait seam with typed transport errors
//! - Paced, strictly sequential image analysis
//! - Failure absorption: a bad image never aborts the batch
//! - Prompt construction with embedded response schema

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod monitor;
pub mod prompt;

pub use client::{ModelError, ReplayModel, VisionModel};
pub use config::MonitorConfig;
pub use monitor::FlightMonitor;
