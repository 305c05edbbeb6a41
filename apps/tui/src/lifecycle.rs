use crate::error::FetchError;
use thiserror::Error;

/// Lifecycle of one user-triggered request.
///
/// A single tag instead of separate loading/error/result flags, so a view can
/// never be loading and holding a result at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

/// Identifies the request a slot is currently waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    #[error("Enter a query first")]
    EmptyQuery,
    #[error("A request is already running")]
    InFlight,
}

/// Fetch state owned by one view, plus the rules for entering and leaving `Loading`
#[derive(Debug)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    failure_message: &'static str,
    pending: Option<Ticket>,
    issued: u64,
}

impl<T> FetchSlot<T> {
    pub const fn new(failure_message: &'static str) -> Self {
        Self {
            state: FetchState::Idle,
            failure_message,
            pending: None,
            issued: 0,
        }
    }

    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub const fn result(&self) -> Option<&T> {
        match &self.state {
            FetchState::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enters `Loading`, dropping whatever the previous request left behind.
    /// Refused while a request from this slot is still in flight.
    pub fn begin(&mut self) -> Result<Ticket, Refusal> {
        if self.is_loading() {
            return Err(Refusal::InFlight);
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        self.state = FetchState::Loading;
        Ok(ticket)
    }

    /// Like [`FetchSlot::begin`], but only for a query with visible content.
    /// Returns the trimmed query to send.
    pub fn begin_query<'q>(&mut self, query: &'q str) -> Result<(Ticket, &'q str), Refusal> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Refusal::EmptyQuery);
        }

        Ok((self.begin()?, query))
    }

    /// Applies an outcome. Returns false when the ticket is stale and the outcome was dropped.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(?ticket, pending = ?self.pending, "dropping stale outcome");
            return false;
        }

        self.pending = None;
        self.state = match outcome {
            Ok(payload) => FetchState::Succeeded(payload),
            Err(error) => {
                tracing::error!(%error, "{}", self.failure_message);
                FetchState::Failed(self.failure_message.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILED: &str = "System could not analyze supply chain.";

    fn semantic() -> FetchError {
        FetchError::Semantic {
            message: "Company not found".to_string(),
        }
    }

    #[test]
    fn test_begin_enters_loading_and_clears_previous_outcome() -> Result<(), Refusal> {
        let mut slot = FetchSlot::new(FAILED);
        let ticket = slot.begin()?;
        slot.resolve(ticket, Err(semantic()));
        assert!(slot.error().is_some());

        slot.begin()?;

        assert_eq!(slot.state(), &FetchState::<u32>::Loading);
        assert!(slot.error().is_none());
        assert!(slot.result().is_none());
        Ok(())
    }

    #[test]
    fn test_second_trigger_refused_while_loading() -> Result<(), Refusal> {
        let mut slot = FetchSlot::<u32>::new(FAILED);
        slot.begin()?;

        assert_eq!(slot.begin(), Err(Refusal::InFlight));
        Ok(())
    }

    #[test]
    fn test_blank_queries_never_start() {
        let mut slot = FetchSlot::<u32>::new(FAILED);

        assert_eq!(slot.begin_query(""), Err(Refusal::EmptyQuery));
        assert_eq!(slot.begin_query("   \t"), Err(Refusal::EmptyQuery));
        assert_eq!(slot.state(), &FetchState::Idle);
    }

    #[test]
    fn test_query_is_trimmed() -> Result<(), Refusal> {
        let mut slot = FetchSlot::<u32>::new(FAILED);
        let (_, query) = slot.begin_query("  Pfizer Vaccine ")?;

        assert_eq!(query, "Pfizer Vaccine");
        Ok(())
    }

    #[test]
    fn test_failure_uses_static_message() -> Result<(), Refusal> {
        let mut slot = FetchSlot::<u32>::new(FAILED);
        let ticket = slot.begin()?;

        assert!(slot.resolve(ticket, Err(semantic())));

        assert!(!slot.is_loading());
        assert!(slot.result().is_none());
        assert_eq!(slot.error(), Some(FAILED));
        Ok(())
    }

    #[test]
    fn test_stale_outcome_is_dropped() -> Result<(), Refusal> {
        let mut slot = FetchSlot::new(FAILED);
        let first = slot.begin()?;
        slot.resolve(first, Err(semantic()));
        let second = slot.begin()?;

        assert!(!slot.resolve(first, Ok(1)));
        assert!(slot.is_loading());

        assert!(slot.resolve(second, Ok(2)));
        assert_eq!(slot.result(), Some(&2));
        Ok(())
    }

    #[test]
    fn test_sequential_successes_keep_only_latest() -> Result<(), Refusal> {
        let mut slot = FetchSlot::new(FAILED);
        let first = slot.begin()?;
        slot.resolve(first, Ok(vec!["first"]));
        let second = slot.begin()?;
        slot.resolve(second, Ok(vec!["second"]));

        assert_eq!(slot.result(), Some(&vec!["second"]));
        Ok(())
    }
}
