//! Shared types, errors, and configuration for Sanad.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and amount formatting
//! - Year-month values for report filtering
//! - Pagination types for the ledger table
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
