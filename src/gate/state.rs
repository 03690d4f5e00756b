use crate::utils::CCStr;

/// The three mutually exclusive phases of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Errored,
    Settled,
}
impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Loading => "loading",
            Self::Errored => "errored",
            Self::Settled => "settled",
        })
    }
}

/// State of an async gate.
///
/// A gate starts in [GateState::Loading] and moves exactly once to one of the two terminal
/// variants. Carrying the error and the data inside the variants means a state can never
/// be loading while holding a result, nor hold both an error and data.
///
/// Gates that only care about completion use `GateState<()>`.
///
/// # Examples
///
/// ```rust
/// use renders_after_async::prelude::*;
///
/// let state = GateState::Settled("It worked!");
/// assert!(!state.is_loading());
/// assert!(state.error().is_none());
/// assert_eq!(state.data(), Some(&"It worked!"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GateState<D> {
    /// The operation has not settled yet
    Loading,
    /// The operation failed, with the `Display` text of its error
    Errored(CCStr),
    /// The operation succeeded with this value
    Settled(D),
}

impl<D> Default for GateState<D> {
    fn default() -> Self {
        GateState::Loading
    }
}

impl<D> GateState<D> {
    pub fn phase(&self) -> Phase {
        match self {
            GateState::Loading => Phase::Loading,
            GateState::Errored(_) => Phase::Errored,
            GateState::Settled(_) => Phase::Settled,
        }
    }

    /// True until the operation settles, one way or the other.
    pub fn is_loading(&self) -> bool {
        matches!(self, GateState::Loading)
    }

    /// The recorded failure, if the operation rejected.
    pub fn error(&self) -> Option<&CCStr> {
        match self {
            GateState::Errored(e) => Some(e),
            _ => None,
        }
    }

    /// The resolved value, if the operation succeeded.
    pub fn data(&self) -> Option<&D> {
        match self {
            GateState::Settled(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_phase() {
        let loading = GateState::<u8>::default();
        assert_eq!(loading.phase(), Phase::Loading);
        assert!(loading.is_loading());
        assert!(loading.error().is_none() && loading.data().is_none());

        let errored = GateState::<u8>::Errored("boom".into());
        assert_eq!(errored.phase(), Phase::Errored);
        assert!(!errored.is_loading());
        assert_eq!(errored.error().map(|e| &**e), Some("boom"));
        assert!(errored.data().is_none());

        let settled = GateState::Settled(7u8);
        assert_eq!(settled.phase(), Phase::Settled);
        assert!(!settled.is_loading());
        assert!(settled.error().is_none());
        assert_eq!(settled.data(), Some(&7));
    }
}
