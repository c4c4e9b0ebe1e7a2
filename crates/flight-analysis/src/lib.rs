//! # Flight Analysis
//!
//! Response normalization and sequence analytics for flight image
//! monitoring. Takes free-text or JSON-ish model replies and coerces them
//! into fixed [`flight_domain::FlightAnalysisRecord`] values, then detects
//! trends across ordered record sequences.
//!
//! ## Features
//!
//! - Structured JSON extraction with heuristic keyword fallback
//! - Status-transition and safety-trend detection over sequences
//! - Monitoring summaries with review recommendations
//! - JSON and Markdown report generation

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod export;
pub mod extractor;
pub mod normalizer;
pub mod reports;
pub mod sequence;

pub use error::AnalysisError;
pub use normalizer::normalize;
pub use reports::MonitoringReport;
pub use sequence::{analyze_sequence, summarize};
