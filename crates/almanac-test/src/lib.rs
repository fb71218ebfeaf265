//! Almanac CalDAV server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `almanac_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use almanac_core::*;
    pub use almanac_service::*;

    // Re-export config from both core and app
    pub mod config {
        pub use almanac_app::config::ConfigHandler;
        pub use almanac_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use almanac_app::*;

    pub mod api {
        pub use almanac_app::app::api::*;
    }
}

pub use almanac_rfc as rfc;
