pub mod access;
pub mod accept;
