//! HTTP error rendering for Horizon.
//!
//! This crate provides:
//! - `application/problem+json` documents built from application errors
//! - An error type handlers can return directly
//! - Test helpers comparing problem documents

pub mod problem;
pub mod testing;

pub use problem::{ApiError, PROBLEM_CONTENT_TYPE, Problem};
