use std::cell::RefCell;

use dioxus::prelude::*;

use super::state::GateState;
use crate::utils::CheapClone;

/// Storage for the state of one gate.
///
/// The gate only ever needs to read a snapshot and commit a new state. Implementing this
/// trait for a reactive container lets the host re-render on every commit.
pub trait GateCell: Clone + 'static {
    type Data: Clone + 'static;

    fn snapshot(&self) -> GateState<Self::Data>;

    fn commit(&mut self, state: GateState<Self::Data>);
}

/// Plain shared cell, for hosts without a reactive runtime.
pub type LocalCell<D> = CheapClone<RefCell<GateState<D>>>;

impl<D: Clone + 'static> GateCell for LocalCell<D> {
    type Data = D;

    fn snapshot(&self) -> GateState<D> {
        self.borrow().clone()
    }

    fn commit(&mut self, state: GateState<D>) {
        *self.borrow_mut() = state;
    }
}

impl<D: Clone + 'static> GateCell for Signal<GateState<D>> {
    type Data = D;

    // Peek so the gate itself never subscribes the current scope.
    fn snapshot(&self) -> GateState<D> {
        self.peek().clone()
    }

    fn commit(&mut self, state: GateState<D>) {
        *self.write() = state;
    }
}
