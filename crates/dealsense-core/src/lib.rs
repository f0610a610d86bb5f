//! dealsense-core
//!
//! Pure domain types for similar-deal context generation: the deal and
//! activity records handed over by retrieval, and the text generation
//! capability the formatter delegates to.
//! No AWS SDK dependency — this is the shared vocabulary of the workspace.

pub mod error;
pub mod generator;
pub mod models;
