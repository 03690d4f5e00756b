use dioxus::prelude::*;

use super::operation::AsyncOperation;
use crate::{gate::GateState, hooks::use_async_gate};

/// Runs `perform_async` once and hands the whole [GateState] to `render` on every render.
///
/// No view policy is applied: `render` decides what loading, failure and data look like.
///
/// # Examples
///
/// ```rust
/// use renders_after_async::prelude::*;
///
/// #[allow(non_snake_case)]
/// fn Motd() -> Element {
///     rsx! {
///         RendersAfterAsync::<String> {
///             perform_async: AsyncOperation::without_input(|| async {
///                 Ok::<_, CCStr>("It worked!".to_string())
///             }),
///             render: |state: GateState<String>| match state {
///                 GateState::Loading => rsx! { "..." },
///                 GateState::Errored(e) => rsx! { "Failed: {e}" },
///                 GateState::Settled(message) => rsx! { "{message}" },
///             },
///         }
///     }
/// }
/// ```
#[component]
pub fn RendersAfterAsync<D: Clone + PartialEq + 'static>(
    perform_async: AsyncOperation<(), D>,
    render: Callback<GateState<D>, Element>,
) -> Element {
    let state = use_async_gate((), move |()| perform_async.call(()));

    use_drop(|| log::debug!("RendersAfterAsync Dropped"));

    let snapshot = state.read().clone();
    log::debug!("RendersAfterAsync Rendered ({})", snapshot.phase());

    render.call(snapshot)
}
