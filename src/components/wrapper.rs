use dioxus::prelude::*;

use std::future::Future;

use super::{
    operation::AsyncOperation,
    view::{View, ViewSlot},
};
use crate::{
    gate::{GateState, Phase},
    hooks::use_async_gate,
    utils::{CheapClone, EqCheapClone},
};

struct WrappedParts<P> {
    perform_async: AsyncOperation<P, ()>,
    loading: Option<View>,
    error: Option<View>,
    content: View<P>,
}

/// A content view that only renders once an async operation has succeeded.
///
/// Produced by [renders_after_async]. Cheap to clone, compared by identity.
pub struct AsyncWrapped<P>(EqCheapClone<WrappedParts<P>>);

impl<P> Clone for AsyncWrapped<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<P> PartialEq for AsyncWrapped<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: Clone + PartialEq + 'static> AsyncWrapped<P> {
    /// Renders an [AsyncWrapper] instance for `input`.
    ///
    /// Every instance runs the operation once, with the `input` it was first rendered with.
    pub fn render(&self, input: P) -> Element {
        rsx! {
            AsyncWrapper::<P> { wrapped: self.clone(), input }
        }
    }

    /// Like [AsyncWrapped::render], and hands the gate state of the instance to `on_state`
    /// on every render, so the recorded failure can be inspected.
    pub fn render_observed(&self, input: P, on_state: Callback<GateState<()>>) -> Element {
        rsx! {
            AsyncWrapper::<P> { wrapped: self.clone(), input, on_state }
        }
    }
}

/// Wraps a content view so that it only shows after `perform_async` succeeded.
///
/// `perform_async` receives the input of the instance. Until it settles, `loading` is
/// rendered, or nothing if it is `None`. If it fails, `error` is rendered, or nothing if it
/// is `None`; the failure is logged and kept in the gate state but never propagated to an
/// error boundary. Once it succeeds, the content view is rendered with the original input.
///
/// # Examples
///
/// ```rust
/// use renders_after_async::prelude::*;
///
/// #[derive(Props, Clone, PartialEq)]
/// struct ProfileProps {
///     user_id: u32,
/// }
///
/// #[allow(non_snake_case)]
/// fn Profile(props: ProfileProps) -> Element {
///     let user_id = props.user_id;
///     rsx! { div { "Profile {user_id}" } }
/// }
///
/// async fn warm_cache(props: ProfileProps) -> Result<(), String> {
///     let _ = props.user_id;
///     Ok(())
/// }
///
/// #[allow(non_snake_case)]
/// fn Page() -> Element {
///     let profile = use_hook(|| {
///         renders_after_async(
///             warm_cache,
///             Some(View::plain(|| rsx! { "Loading..." })),
///             None,
///         )(View::new(Profile))
///     });
///     profile.render(ProfileProps { user_id: 7 })
/// }
/// ```
pub fn renders_after_async<P, Fut, E>(
    perform_async: impl Fn(P) -> Fut + 'static,
    loading: Option<View>,
    error: Option<View>,
) -> impl FnOnce(View<P>) -> AsyncWrapped<P>
where
    P: Clone + PartialEq + 'static,
    Fut: Future<Output = Result<(), E>> + 'static,
    E: core::fmt::Display + 'static,
{
    let perform_async = AsyncOperation::new(perform_async);
    move |content| {
        AsyncWrapped(
            CheapClone::new(WrappedParts {
                perform_async,
                loading,
                error,
                content,
            })
            .into(),
        )
    }
}

/// Component behind [AsyncWrapped::render].
///
/// `on_state`, when given, receives the current gate state on every render. It is the only
/// way to read a failure that no error view shows.
#[component]
pub fn AsyncWrapper<P: Clone + PartialEq + 'static>(
    wrapped: AsyncWrapped<P>,
    input: P,
    on_state: Option<Callback<GateState<()>>>,
) -> Element {
    let perform_async = wrapped.0.perform_async.clone();
    let state = use_async_gate(input.clone(), move |input| perform_async.call(input));

    use_drop(|| log::debug!("AsyncWrapper Dropped"));

    let snapshot = state.read().clone();
    let phase = snapshot.phase();
    log::debug!("AsyncWrapper Rendered ({phase})");

    if let Some(on_state) = on_state {
        on_state.call(snapshot);
    }

    match phase {
        Phase::Loading => substitute(wrapped.0.loading.as_ref()),
        Phase::Errored => substitute(wrapped.0.error.as_ref()),
        Phase::Settled => rsx! {
            ViewSlot::<P> { view: wrapped.0.content.clone(), input }
        },
    }
}

fn substitute(view: Option<&View>) -> Element {
    match view {
        Some(view) => rsx! {
            ViewSlot::<()> { view: view.clone(), input: () }
        },
        None => rsx! {},
    }
}
