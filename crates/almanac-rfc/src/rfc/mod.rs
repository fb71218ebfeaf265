pub mod dav;
pub mod ical;
