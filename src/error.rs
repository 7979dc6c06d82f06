use core::fmt;
use roost_core::RootKind;
use thiserror::Error;

/// A root component kind no platform can attach.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("root component `{0}` is not supported")]
pub struct UnsupportedRoot(pub RootKind);

/// Errors returned by the component manager.
///
/// `E` is the platform’s error type.
#[derive(Error, Debug)]
pub enum Error<E: fmt::Debug> {
    /// The requested root can’t be attached. Nothing was changed.
    #[error(transparent)]
    UnsupportedRoot(#[from] UnsupportedRoot),

    /// The component tree failed validation. Nothing was changed.
    #[error(transparent)]
    Component(#[from] roost_core::Error),

    /// The platform failed while mutating native views.
    #[error("platform error: {0:?}")]
    Platform(E),
}
