pub mod error;
pub mod multistatus;
