//! Utility types and functions

pub mod cache;
pub mod config;
pub mod logger;
