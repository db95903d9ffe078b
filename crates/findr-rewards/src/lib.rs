//! Reward points and membership tiers for Findr job-seekers and employers.
//!
//! The [`rewards`] module holds the pure engine: completeness scoring, points aggregation,
//! and tier classification. Everything else in the crate is plumbing for the adapters that
//! sit around it.

pub mod config;
pub mod error;
pub mod rewards;
pub mod telemetry;
