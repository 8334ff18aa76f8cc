//! Questionário backend API module
//!
//! HTTP client for the project backend: questionnaire submission,
//! interest registration, and aggregated statistics.

mod client;
pub mod model;

pub use client::{ApiClient, ApiError};
pub use model::{CategoryCount, InterestPayload, StatsResponse, SurveyPayload};
