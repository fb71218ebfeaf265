//! Request-scoped access capabilities.

use chrono::{DateTime, Utc};

use crate::store::CalendarStore;

/// Visibility granted by an access ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketVisibility {
    /// Only the busy/free shape of events may be seen.
    FreeBusy,
    ReadOnly,
    ReadWrite,
}

/// An opaque capability presented with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTicket {
    pub key: String,
    pub visibility: TicketVisibility,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessTicket {
    #[must_use]
    pub fn new(key: impl Into<String>, visibility: TicketVisibility) -> Self {
        Self {
            key: key.into(),
            visibility,
            expires_at: None,
        }
    }

    #[must_use]
    pub fn expiring_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    #[must_use]
    pub fn is_free_busy(&self) -> bool {
        self.visibility == TicketVisibility::FreeBusy
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// The identity under which the current request executes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessContext {
    ticket: Option<AccessTicket>,
}

impl AccessContext {
    /// A context without any ticket.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ticket(ticket: AccessTicket) -> Self {
        Self {
            ticket: Some(ticket),
        }
    }

    /// ## Summary
    /// Builds the context for a presented ticket key.
    ///
    /// Unknown keys and expired tickets yield an anonymous context.
    #[must_use]
    pub fn resolve(store: &dyn CalendarStore, key: Option<&str>, now: DateTime<Utc>) -> Self {
        let Some(key) = key else {
            return Self::anonymous();
        };

        match store.find_ticket(key) {
            Some(ticket) if ticket.is_expired(now) => {
                tracing::debug!(ticket = %key, "Ignoring expired ticket");
                Self::anonymous()
            }
            Some(ticket) => Self::with_ticket(ticket),
            None => {
                tracing::debug!(ticket = %key, "Ignoring unknown ticket");
                Self::anonymous()
            }
        }
    }

    /// The current ticket, if any.
    #[must_use]
    pub fn ticket(&self) -> Option<&AccessTicket> {
        self.ticket.as_ref()
    }
}
