//! # Components Module
//!
//! Two ways to put a component behind an async operation, both driven by
//! [use_async_gate](crate::hooks::use_async_gate):
//!
//! - [renders_after_async](wrapper::renders_after_async) wraps an existing content view. The
//!   view is rendered with its original input once the operation succeeded, optional
//!   substitute views cover the loading and error phases.
//! - [RendersAfterAsync](children::RendersAfterAsync) gives the gate state, resolved data
//!   included, to a caller-supplied render function.

pub mod children;
mod operation;
mod view;
pub mod wrapper;

pub use children::RendersAfterAsync;
pub use operation::AsyncOperation;
pub use view::{View, ViewSlot};
pub use wrapper::{renders_after_async, AsyncWrapped, AsyncWrapper};
