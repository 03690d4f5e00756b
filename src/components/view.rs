use dioxus::prelude::*;

use crate::utils::{CheapClone, EqCheapClone};

/// A renderable unit: anything turning an input into an [Element].
///
/// Plain component functions, `#[component]` functions and closures all fit. Two views are
/// equal only if one was cloned from the other.
///
/// # Examples
///
/// ```rust
/// use renders_after_async::prelude::*;
///
/// #[derive(Props, Clone, PartialEq)]
/// struct GreetingProps {
///     name: String,
/// }
///
/// #[allow(non_snake_case)]
/// fn Greeting(props: GreetingProps) -> Element {
///     let name = props.name;
///     rsx! { "Hello {name}" }
/// }
///
/// let content = View::new(Greeting);
/// let _spinner = View::plain(|| rsx! { span { class: "loading" } });
/// assert!(content == content.clone());
/// ```
pub struct View<P = ()>(EqCheapClone<dyn Fn(P) -> Element>);

impl<P: 'static> View<P> {
    pub fn new(render: impl Fn(P) -> Element + 'static) -> Self {
        let render: CheapClone<dyn Fn(P) -> Element> = CheapClone::new(render);
        Self(render.into())
    }

    /// Renders the view inline. Prefer [ViewSlot] when the view may use hooks.
    pub fn call(&self, input: P) -> Element {
        (*self.0)(input)
    }
}

impl View<()> {
    /// A view without input, such as a loading or an error placeholder.
    pub fn plain(render: impl Fn() -> Element + 'static) -> Self {
        Self::new(move |()| render())
    }
}

impl<P> Clone for View<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<P> PartialEq for View<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<P> core::fmt::Debug for View<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("View")
    }
}

/// Renders `view` with `input` in a scope of its own.
///
/// Views are swapped when a gate changes phase; giving each one its own scope keeps their
/// hooks apart.
#[component]
pub fn ViewSlot<P: Clone + PartialEq + 'static>(view: View<P>, input: P) -> Element {
    view.call(input)
}
