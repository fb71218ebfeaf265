//! Domain model for calendar collections.

mod access;
mod collection;
mod item;

pub use access::{AccessContext, AccessTicket, TicketVisibility};
pub use collection::{Collection, CollectionLocation, ParentState};
pub use item::{Item, ItemKind, Stamp, StampKind};
