use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture, TryFutureExt};

use crate::utils::{CCStr, CheapClone, EqCheapClone};

type BoxedOperation<I, D> = dyn Fn(I) -> LocalBoxFuture<'static, Result<D, CCStr>>;

/// An opaque async operation, handed to the adapters as a prop.
///
/// Errors of any `Display` type are turned into their text. Like [View](super::View), two
/// operations are equal only if one was cloned from the other.
pub struct AsyncOperation<I, D>(EqCheapClone<BoxedOperation<I, D>>);

impl<I: 'static, D: 'static> AsyncOperation<I, D> {
    pub fn new<Fut, E>(operation: impl Fn(I) -> Fut + 'static) -> Self
    where
        Fut: Future<Output = Result<D, E>> + 'static,
        E: core::fmt::Display + 'static,
    {
        let operation: CheapClone<BoxedOperation<I, D>> = CheapClone::new(move |input: I| {
            operation(input)
                .map_err(|e| CCStr::from(e.to_string()))
                .boxed_local()
        });
        Self(operation.into())
    }

    pub fn call(&self, input: I) -> LocalBoxFuture<'static, Result<D, CCStr>> {
        (*self.0)(input)
    }
}

impl<D: 'static> AsyncOperation<(), D> {
    pub fn without_input<Fut, E>(operation: impl Fn() -> Fut + 'static) -> Self
    where
        Fut: Future<Output = Result<D, E>> + 'static,
        E: core::fmt::Display + 'static,
    {
        Self::new(move |()| operation())
    }
}

impl<I, D> Clone for AsyncOperation<I, D> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<I, D> PartialEq for AsyncOperation<I, D> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<I, D> core::fmt::Debug for AsyncOperation<I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AsyncOperation")
    }
}
