pub mod negotiate;
pub mod service;
