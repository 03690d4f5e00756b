//! Render a loading view until an async operation settles, then either an error view or the
//! content it guards.
//!
//! The [gate] module holds the state machine: an operation is invoked exactly once, the state
//! moves from loading to a single terminal phase, and nothing is written anymore once the
//! owning instance has been deactivated. [hooks::use_async_gate] binds a gate to the lifecycle
//! of a Dioxus component, and [components] exposes the two adapters built on it:
//!
//! - [renders_after_async](components::renders_after_async), which wraps an existing view.
//! - [RendersAfterAsync](components::RendersAfterAsync), which hands the state to a render
//!   function.
//!
//! ```rust
//! use renders_after_async::prelude::*;
//!
//! #[allow(non_snake_case)]
//! fn Status() -> Element {
//!     rsx! {
//!         RendersAfterAsync::<u32> {
//!             perform_async: AsyncOperation::without_input(|| async { Ok::<_, CCStr>(3) }),
//!             render: |state: GateState<u32>| rsx! {
//!                 if state.is_loading() {
//!                     "Loading..."
//!                 } else if let Some(count) = state.data() {
//!                     "{count} items"
//!                 }
//!             },
//!         }
//!     }
//! }
//! ```

pub mod components;
pub mod gate;
pub mod hooks;
pub mod utils;

/// Re-exports everything needed to use the adapters, the Dioxus prelude included.
pub mod prelude {
    pub use super::components::{
        renders_after_async, AsyncOperation, AsyncWrapped, AsyncWrapper, RendersAfterAsync,
        View, ViewSlot,
    };
    pub use super::gate::{
        local_gate, ActiveGate, AsyncGate, CancellationFlag, Completion, GateCell, GateState,
        LocalCell, Phase, Subscription,
    };
    pub use super::hooks::use_async_gate;
    pub use super::utils::CCStr;
    pub use dioxus::prelude::*;
}
