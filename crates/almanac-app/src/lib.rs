//! Almanac HTTP layer: salvo routes, depot hoops and handlers.

pub mod app;
pub mod config;
pub mod error;
pub mod store_handler;
