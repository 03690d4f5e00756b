use std::cell::Cell;
use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture};

use super::{
    cell::{GateCell, LocalCell},
    state::{GateState, Phase},
};
use crate::utils::{log_error_ccstr, CheapClone};

/// Set once when the instance owning a gate is torn down. Never reset.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(CheapClone<Cell<bool>>);
impl CancellationFlag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Returns `true` only for the call that actually raised the flag.
    fn raise(&self) -> bool {
        !self.0.replace(true)
    }
}

/// Handle given back by [AsyncGate::activate], used by the host to deactivate the gate.
#[derive(Debug, Clone)]
pub struct Subscription {
    flag: CancellationFlag,
}
impl Subscription {
    /// Marks the instance as torn down.
    ///
    /// Any completion observed afterward is discarded without touching the state. This does
    /// not abort the operation itself. Calling it again has no further effect.
    pub fn deactivate(&self) {
        if self.flag.raise() {
            log::debug!("async_gate - deactivated");
        }
    }

    pub fn is_deactivated(&self) -> bool {
        self.flag.is_set()
    }
}

/// Future settling the gate once the operation completes. The host drives it on its own
/// task queue.
pub type Completion = LocalBoxFuture<'static, ()>;

/// An inactive gate.
///
/// Activation consumes it, so a given gate can run at most one operation.
///
/// # Examples
///
/// ```rust
/// use renders_after_async::prelude::*;
/// use futures_util::FutureExt;
///
/// let (gate, completion) = local_gate::<usize>()
///     .activate("hi", |input| async move { Ok::<_, CCStr>(input.len()) });
/// assert!(gate.current_state().is_loading());
///
/// completion.now_or_never();
/// assert_eq!(gate.current_state(), GateState::Settled(2));
/// ```
pub struct AsyncGate<C: GateCell> {
    cell: C,
}

impl<C: GateCell> AsyncGate<C> {
    pub fn new(cell: C) -> Self {
        Self { cell }
    }

    /// Invokes `operation` once with `input` and returns the active gate along with the
    /// [Completion] that records the outcome.
    ///
    /// The completion commits [GateState::Settled] or [GateState::Errored] unless the gate
    /// was deactivated first, in which case the outcome is dropped.
    pub fn activate<I, Op, Fut, E>(self, input: I, operation: Op) -> (ActiveGate<C>, Completion)
    where
        Op: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<C::Data, E>> + 'static,
        E: core::fmt::Display + 'static,
    {
        let mut cell = self.cell;
        if !cell.snapshot().is_loading() {
            cell.commit(GateState::Loading);
        }

        let subscription = Subscription {
            flag: CancellationFlag::default(),
        };
        let pending = operation(input);
        log::debug!("async_gate - activated");

        let flag = subscription.flag.clone();
        let mut target = cell.clone();
        let completion = async move {
            let outcome = pending.await;
            if flag.is_set() {
                match outcome {
                    Ok(_) => log::debug!("async_gate - success discarded: deactivated"),
                    Err(e) => log::debug!("async_gate - failure discarded: deactivated: {e}"),
                }
                return;
            }
            let next = match outcome {
                Ok(data) => GateState::Settled(data),
                Err(e) => GateState::Errored(log_error_ccstr(e)),
            };
            log::debug!("async_gate - {} -> {}", Phase::Loading, next.phase());
            target.commit(next);
        }
        .boxed_local();

        (ActiveGate { cell, subscription }, completion)
    }
}

/// An inactive gate storing its state in a plain [LocalCell].
pub fn local_gate<D: Clone + 'static>() -> AsyncGate<LocalCell<D>> {
    AsyncGate::new(LocalCell::default())
}

/// A gate whose operation has been started.
pub struct ActiveGate<C: GateCell> {
    cell: C,
    subscription: Subscription,
}

impl<C: GateCell> ActiveGate<C> {
    /// The latest committed state.
    pub fn current_state(&self) -> GateState<C::Data> {
        self.cell.snapshot()
    }

    pub fn subscription(&self) -> Subscription {
        self.subscription.clone()
    }

    pub fn deactivate(&self) {
        self.subscription.deactivate()
    }
}
