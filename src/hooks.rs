use dioxus::prelude::*;

use std::future::Future;

use crate::gate::{AsyncGate, GateState};

/// Runs `operation` once, when the calling component is first rendered, and tracks its
/// outcome in a signal.
///
/// This is similar to a [Resource] but with some major differences:
/// 1. The future never re-runs, neither reactively nor when `input` changes. Only the
///    `input` given on the first render is used.
/// 2. The future is spawned with [spawn_forever], so dropping the component does not abort
///    it. Instead the gate is deactivated in [use_drop] and the outcome is discarded.
/// 3. A failure is a state like any other: it never reaches an error boundary.
pub fn use_async_gate<I, D, E, F>(
    input: I,
    operation: impl FnOnce(I) -> F + 'static,
) -> ReadOnlySignal<GateState<D>>
where
    I: 'static,
    D: Clone + 'static,
    E: core::fmt::Display + 'static,
    F: Future<Output = Result<D, E>> + 'static,
{
    let state = use_signal(GateState::default);

    let subscription = use_hook(move || {
        let (gate, completion) = AsyncGate::new(state).activate(input, operation);
        if spawn_forever(completion).is_none() {
            log::warn!("use_async_gate - no runtime to drive the operation, staying in loading");
        }
        gate.subscription()
    });

    use_drop(move || subscription.deactivate());

    state.into()
}
