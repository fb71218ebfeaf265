//! Almanac shared types: configuration, route constants and the core error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
