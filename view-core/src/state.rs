//! Fetch lifecycle state machine
//!
//! One machine per view instance, never shared. Transitions are a pure
//! reducer over tagged events; each fetch carries a monotonically
//! increasing generation, and a resolution from a superseded generation is
//! discarded instead of overwriting newer state.

use tracing::debug;

/// Monotonic tag for one outstanding fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Generation before any fetch was issued
    pub const ZERO: Generation = Generation(0);

    /// The following generation
    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

/// Lifecycle of one view's data fetch
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncViewState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is outstanding
    Loading,
    /// The latest request resolved with data
    Success(T),
    /// The latest request failed; carries the user-visible message
    Error(String),
}

impl<T> AsyncViewState<T> {
    /// Whether a request is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncViewState::Loading)
    }

    /// Data from the latest successful fetch
    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncViewState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Message from the latest failed fetch
    pub fn error_message(&self) -> Option<&str> {
        match self {
            AsyncViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// One lifecycle event, tagged with the generation it belongs to
#[derive(Debug)]
pub enum FetchEvent<T> {
    /// A request was issued
    Started {
        /// Generation of the issued request
        generation: Generation,
    },
    /// A request resolved
    Resolved {
        /// Generation of the resolved request
        generation: Generation,
        /// Outcome of the call
        outcome: api_client::Result<T>,
    },
}

/// Collapse an API failure into the single user-visible message
///
/// A backend rejection surfaces the server's detail when it carried one;
/// every other failure kind maps to the machine's fallback message.
pub fn error_message(error: &api_client::Error, fallback: &str) -> String {
    match error.backend_detail() {
        Some(detail) if !detail.is_empty() => detail.to_string(),
        _ => fallback.to_string(),
    }
}

/// Pure transition function
///
/// `latest` is the generation of the newest issued request. Events from
/// superseded generations leave the state untouched.
pub fn reduce<T>(
    state: AsyncViewState<T>,
    latest: Generation,
    event: FetchEvent<T>,
    fallback: &str,
) -> AsyncViewState<T> {
    match event {
        FetchEvent::Started { generation } if generation == latest => AsyncViewState::Loading,
        FetchEvent::Started { .. } => state,
        FetchEvent::Resolved { generation, .. } if generation != latest => state,
        FetchEvent::Resolved {
            outcome: Ok(data), ..
        } => AsyncViewState::Success(data),
        FetchEvent::Resolved {
            outcome: Err(error),
            ..
        } => AsyncViewState::Error(error_message(&error, fallback)),
    }
}

/// State machine instance exclusively owned by a single view
#[derive(Debug)]
pub struct FetchState<T> {
    state: AsyncViewState<T>,
    latest: Generation,
    fallback: String,
}

impl<T> FetchState<T> {
    /// Machine whose generic failure message names the fetched resource
    pub fn for_resource(resource: &str) -> Self {
        Self::with_fallback(format!("Failed to load {resource}"))
    }

    /// Machine with an explicit generic failure message
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            state: AsyncViewState::Idle,
            latest: Generation::ZERO,
            fallback: fallback.into(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> &AsyncViewState<T> {
        &self.state
    }

    /// Generation of the newest issued request
    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    /// Issue a new fetch: any state moves to `Loading`
    ///
    /// Returns the generation to hand back to [`FetchState::resolve`]. Any
    /// previously outstanding request becomes stale.
    pub fn begin(&mut self) -> Generation {
        self.latest = self.latest.next();
        self.apply(FetchEvent::Started {
            generation: self.latest,
        });
        self.latest
    }

    /// Resolve the fetch tagged `generation`
    ///
    /// Returns whether the event applied; a stale resolution is discarded.
    pub fn resolve(&mut self, generation: Generation, outcome: api_client::Result<T>) -> bool {
        let applied = generation == self.latest;
        if !applied {
            debug!(?generation, latest = ?self.latest, "Discarding stale response");
        }
        self.apply(FetchEvent::Resolved {
            generation,
            outcome,
        });
        applied
    }

    fn apply(&mut self, event: FetchEvent<T>) {
        let state = std::mem::replace(&mut self.state, AsyncViewState::Idle);
        self.state = reduce(state, self.latest, event, &self.fallback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::Error;

    #[test]
    fn test_initial_state_is_idle() {
        let machine: FetchState<u32> = FetchState::for_resource("alerts");
        assert_eq!(*machine.state(), AsyncViewState::Idle);
        assert_eq!(machine.latest_generation(), Generation::ZERO);
    }

    #[test]
    fn test_success_lifecycle() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let generation = machine.begin();
        assert!(machine.state().is_loading());

        assert!(machine.resolve(generation, Ok(7)));
        assert_eq!(machine.state().data(), Some(&7));
    }

    #[test]
    fn test_network_failure_maps_to_resource_message() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let generation = machine.begin();
        machine.resolve(generation, Err(Error::Network("connection refused".into())));

        assert_eq!(
            machine.state().error_message(),
            Some("Failed to load alerts")
        );
    }

    #[test]
    fn test_decode_failure_collapses_to_same_message() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let generation = machine.begin();
        machine.resolve(generation, Err(Error::Decode("missing field".into())));

        assert_eq!(
            machine.state().error_message(),
            Some("Failed to load alerts")
        );
    }

    #[test]
    fn test_backend_detail_overrides_fallback() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let generation = machine.begin();
        machine.resolve(
            generation,
            Err(Error::Backend {
                status: 422,
                detail: Some("amount must be positive".into()),
            }),
        );

        assert_eq!(
            machine.state().error_message(),
            Some("amount must be positive")
        );
    }

    #[test]
    fn test_backend_without_detail_uses_fallback() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let generation = machine.begin();
        machine.resolve(
            generation,
            Err(Error::Backend {
                status: 500,
                detail: None,
            }),
        );

        assert_eq!(
            machine.state().error_message(),
            Some("Failed to load alerts")
        );
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let first = machine.begin();
        let second = machine.begin();

        // The superseded request resolves late and must not apply.
        assert!(!machine.resolve(first, Ok(1)));
        assert!(machine.state().is_loading());

        assert!(machine.resolve(second, Ok(2)));
        assert_eq!(machine.state().data(), Some(&2));
    }

    #[test]
    fn test_stale_error_cannot_clobber_success() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let first = machine.begin();
        let second = machine.begin();
        machine.resolve(second, Ok(2));

        assert!(!machine.resolve(first, Err(Error::Network("late failure".into()))));
        assert_eq!(machine.state().data(), Some(&2));
    }

    #[test]
    fn test_refresh_reenters_from_error() {
        let mut machine: FetchState<u32> = FetchState::for_resource("alerts");

        let generation = machine.begin();
        machine.resolve(generation, Err(Error::Network("down".into())));
        assert!(machine.state().error_message().is_some());

        let generation = machine.begin();
        assert!(machine.state().is_loading());
        machine.resolve(generation, Ok(3));
        assert_eq!(machine.state().data(), Some(&3));
    }
}
