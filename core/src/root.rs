//! Root components: how a tree is attached to the display.

use crate::mappable::{Mappable, Transform};
use crate::navigation::{NavigationBar, TabBar};
use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RootComponent<M> {
    /// No chrome.
    Simple,
    /// Inside a navigation stack.
    Stack(NavigationBar<M>),
    /// Inside tabbed chrome. Not supported by any platform yet.
    Tab(TabBar<M>),
}

/// The kind of a root component, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    Simple,
    Stack,
    Tab,
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RootKind::Simple => write!(f, "simple"),
            RootKind::Stack => write!(f, "stack"),
            RootKind::Tab => write!(f, "tab"),
        }
    }
}

impl<M> RootComponent<M> {
    pub fn kind(&self) -> RootKind {
        match self {
            RootComponent::Simple => RootKind::Simple,
            RootComponent::Stack(_) => RootKind::Stack,
            RootComponent::Tab(_) => RootKind::Tab,
        }
    }
}

impl<M> Default for RootComponent<M> {
    fn default() -> Self {
        RootComponent::Simple
    }
}

impl<M: 'static> Mappable<M> for RootComponent<M> {
    type Mapped<N: 'static> = RootComponent<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> RootComponent<N> {
        match self {
            RootComponent::Simple => RootComponent::Simple,
            RootComponent::Stack(bar) => RootComponent::Stack(bar.map_with(transform)),
            RootComponent::Tab(bar) => RootComponent::Tab(bar.map_with(transform)),
        }
    }
}
