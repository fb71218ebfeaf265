pub mod get_head;
pub mod mkcalendar;
