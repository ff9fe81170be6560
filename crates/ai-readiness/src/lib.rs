//! Scoring engine and report payload assembly for the AI readiness assessment.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
