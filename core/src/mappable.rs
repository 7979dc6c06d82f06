//! Message remapping.
//!
//! Every type that embeds messages implements [`Mappable`], and composite types map their parts
//! with the same shared [`Transform`]. This is what lets a component tree authored against a
//! narrow message type be embedded into a parent with a wider one.

use core::fmt;
use std::sync::Arc;

/// A shared message transform.
///
/// Transforms are reference-counted so that mapped callbacks can hold on to them.
pub struct Transform<M, N>(Arc<dyn Fn(M) -> N + Send + Sync>);

impl<M, N> Transform<M, N> {
    pub fn new<F>(f: F) -> Transform<M, N>
    where
        F: Fn(M) -> N + Send + Sync + 'static,
    {
        Transform(Arc::new(f))
    }

    pub fn apply(&self, message: M) -> N {
        (*self.0)(message)
    }
}

impl<M, N> Clone for Transform<M, N> {
    fn clone(&self) -> Self {
        Transform(Arc::clone(&self.0))
    }
}

impl<M, N> fmt::Debug for Transform<M, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Transform(..)")
    }
}

/// A value whose embedded messages of type `M` can be rewritten.
///
/// Implementations must be total and structure-preserving: every embedded message is replaced by
/// `transform(message)`, and nothing else changes.
pub trait Mappable<M: 'static>: Sized {
    /// The same value with messages of type `N`.
    type Mapped<N: 'static>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> Self::Mapped<N>;

    /// Convenience for [`Mappable::map_with`] with a plain closure.
    fn map<N: 'static, F>(self, f: F) -> Self::Mapped<N>
    where
        F: Fn(M) -> N + Send + Sync + 'static,
    {
        self.map_with(&Transform::new(f))
    }
}

/// A reference-counted function stored in a property bag, e.g. a message factory.
///
/// Callbacks have no structural equality: two callbacks are equal only if they share the same
/// allocation. Mapping always produces a new callback.
pub struct Callback<A, R>(Arc<dyn Fn(A) -> R + Send + Sync>);

impl<A, R> Callback<A, R> {
    pub fn new<F>(f: F) -> Callback<A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Callback(Arc::new(f))
    }

    pub fn call(&self, argument: A) -> R {
        (*self.0)(argument)
    }
}

impl<A: 'static, R: 'static> Callback<A, R> {
    /// Composes `f` after this callback.
    pub fn then<S: 'static, F>(self, f: F) -> Callback<A, S>
    where
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        let inner = self.0;
        Callback(Arc::new(move |argument| f((*inner)(argument))))
    }
}

impl<A, R> Clone for Callback<A, R> {
    fn clone(&self) -> Self {
        Callback(Arc::clone(&self.0))
    }
}

impl<A, R> PartialEq for Callback<A, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.0) as *const () == Arc::as_ptr(&other.0) as *const ()
    }
}

impl<A, R> fmt::Debug for Callback<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Callback(..)")
    }
}

#[test]
fn test_callback_identity() {
    let callback = Callback::new(|x: u32| x + 1);
    assert_eq!(callback, callback.clone(), "clones share the same function");
    assert_ne!(
        callback,
        Callback::new(|x: u32| x + 1),
        "separately created callbacks are never equal"
    );

    let composed = callback.then(|x| x * 10);
    assert_eq!(composed.call(1), 20);
}
