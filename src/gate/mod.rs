//! # Gate Module
//!
//! Framework-independent state machine behind both adapters.
//!
//! An [AsyncGate](machine::AsyncGate) is activated once with an input and an async operation.
//! It starts in the loading phase and settles exactly once, either with the resolved data or
//! with the error of a failed operation. The host owns a [Subscription](machine::Subscription)
//! and deactivates it when the instance is torn down: from then on the outcome of the
//! operation is dropped instead of being written to a state nobody renders anymore.
//!
//! State lives behind the [GateCell](cell::GateCell) seam, so the same machine drives a plain
//! shared cell in tests and a Dioxus `Signal` in components.

mod cell;
mod machine;
mod state;

pub use cell::{GateCell, LocalCell};
pub use machine::{
    local_gate, ActiveGate, AsyncGate, CancellationFlag, Completion, Subscription,
};
pub use state::{GateState, Phase};
