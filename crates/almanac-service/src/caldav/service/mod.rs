pub mod assemble;
pub mod freebusy;
pub mod mkcalendar;
pub mod spool;
