//! Deciding how a component tree is attached.
//!
//! These functions only look at the shape of the current attachment and the requested root; they
//! never touch native views. The component manager executes whatever they return.

use crate::error::UnsupportedRoot;
use roost_core::navigation::NavigationBar;
use roost_core::{RootComponent, RootKind};

/// Shape of the currently attached root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Single,
    Stack,
}

/// What presenting a tree should do.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentAction<M> {
    /// Replace whatever is attached with a fresh attachment.
    Attach(RootComponent<M>),
    /// Push a new screen onto the attached stack.
    Push(NavigationBar<M>),
    /// Present a fresh attachment over the frontmost one.
    PresentModally(RootComponent<M>),
}

/// What rendering a tree should do.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderAction<M> {
    /// Replace the contents of the attached single screen.
    UpdateSingle,
    /// Replace the contents of the attached stack’s top screen, optionally re-rendering its
    /// navigation bar.
    UpdateTop {
        navigation_bar: Option<NavigationBar<M>>,
    },
    /// Replace whatever is attached with a fresh attachment.
    Attach(RootComponent<M>),
}

impl<M> PresentAction<M> {
    /// The navigation bar the action will render, if any.
    pub fn navigation_bar(&self) -> Option<&NavigationBar<M>> {
        match self {
            PresentAction::Push(bar)
            | PresentAction::Attach(RootComponent::Stack(bar))
            | PresentAction::PresentModally(RootComponent::Stack(bar)) => Some(bar),
            _ => None,
        }
    }
}

impl<M> RenderAction<M> {
    /// The navigation bar the action will render, if any.
    pub fn navigation_bar(&self) -> Option<&NavigationBar<M>> {
        match self {
            RenderAction::UpdateTop {
                navigation_bar: Some(bar),
            }
            | RenderAction::Attach(RootComponent::Stack(bar)) => Some(bar),
            _ => None,
        }
    }
}

fn supported<M>(root: RootComponent<M>) -> Result<RootComponent<M>, UnsupportedRoot> {
    match root.kind() {
        RootKind::Tab => Err(UnsupportedRoot(RootKind::Tab)),
        _ => Ok(root),
    }
}

/// Decides what `present` does.
pub fn decide_present<M>(
    current: Option<AttachmentKind>,
    root: RootComponent<M>,
    modally: bool,
) -> Result<PresentAction<M>, UnsupportedRoot> {
    let root = supported(root)?;
    Ok(match (current, root) {
        (Some(_), root) if modally => PresentAction::PresentModally(root),
        (Some(AttachmentKind::Stack), RootComponent::Stack(bar)) => PresentAction::Push(bar),
        (_, root) => PresentAction::Attach(root),
    })
}

/// Decides what `render_with_root` does.
pub fn decide_render_with_root<M>(
    current: Option<AttachmentKind>,
    root: RootComponent<M>,
) -> Result<RenderAction<M>, UnsupportedRoot> {
    let root = supported(root)?;
    Ok(match (current, root) {
        (Some(AttachmentKind::Single), RootComponent::Simple) => RenderAction::UpdateSingle,
        (Some(AttachmentKind::Stack), RootComponent::Stack(bar)) => RenderAction::UpdateTop {
            navigation_bar: Some(bar),
        },
        (_, root) => RenderAction::Attach(root),
    })
}

/// Decides what `render` does: update in place, or attach as a simple root if nothing is
/// attached yet.
pub fn decide_render<M>(current: Option<AttachmentKind>) -> RenderAction<M> {
    match current {
        Some(AttachmentKind::Single) => RenderAction::UpdateSingle,
        Some(AttachmentKind::Stack) => RenderAction::UpdateTop {
            navigation_bar: None,
        },
        None => RenderAction::Attach(RootComponent::Simple),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_core::navigation::{navigation_bar, NavigationBarTitle, TabBar};
    use roost_core::style::StyleSheet;

    fn stack() -> RootComponent<()> {
        RootComponent::Stack(navigation_bar(NavigationBarTitle::text("Inbox")))
    }

    fn tab() -> RootComponent<()> {
        RootComponent::Tab(TabBar {
            items: Vec::new(),
            style: StyleSheet::default(),
        })
    }

    const SHAPES: [Option<AttachmentKind>; 3] =
        [None, Some(AttachmentKind::Single), Some(AttachmentKind::Stack)];

    #[test]
    fn tab_roots_are_always_refused() {
        for current in SHAPES.iter().cloned() {
            for modally in [false, true].iter().cloned() {
                assert_eq!(
                    decide_present(current, tab(), modally),
                    Err(UnsupportedRoot(RootKind::Tab)),
                    "present over {:?} (modally: {})",
                    current,
                    modally
                );
            }
            assert_eq!(
                decide_render_with_root(current, tab()),
                Err(UnsupportedRoot(RootKind::Tab)),
                "render over {:?}",
                current
            );
        }
    }

    #[test]
    fn present_decisions() {
        let bar = navigation_bar(NavigationBarTitle::text("Inbox"));

        assert_eq!(
            decide_present(None, stack(), false),
            Ok(PresentAction::Attach(stack())),
            "nothing attached"
        );
        assert_eq!(
            decide_present(None, RootComponent::<()>::Simple, true),
            Ok(PresentAction::Attach(RootComponent::Simple)),
            "modal with nothing attached falls back to attaching"
        );
        assert_eq!(
            decide_present(Some(AttachmentKind::Stack), stack(), false),
            Ok(PresentAction::Push(bar.clone())),
            "stack over stack pushes"
        );
        assert_eq!(
            decide_present(Some(AttachmentKind::Stack), stack(), false)
                .ok()
                .as_ref()
                .and_then(PresentAction::navigation_bar),
            Some(&bar)
        );
        assert_eq!(
            decide_present(Some(AttachmentKind::Single), RootComponent::<()>::Simple, true)
                .ok()
                .and_then(|action| action.navigation_bar().cloned()),
            None
        );
        assert_eq!(
            decide_present(Some(AttachmentKind::Stack), RootComponent::<()>::Simple, false),
            Ok(PresentAction::Attach(RootComponent::Simple)),
            "simple over stack replaces"
        );
        assert_eq!(
            decide_present(Some(AttachmentKind::Single), stack(), false),
            Ok(PresentAction::Attach(stack())),
            "stack over single replaces"
        );
        assert_eq!(
            decide_present(Some(AttachmentKind::Stack), stack(), true),
            Ok(PresentAction::PresentModally(stack())),
            "modal wins over pushing"
        );
    }

    #[test]
    fn render_decisions() {
        assert_eq!(
            decide_render_with_root(Some(AttachmentKind::Single), RootComponent::<()>::Simple),
            Ok(RenderAction::UpdateSingle)
        );
        assert_eq!(
            decide_render_with_root(Some(AttachmentKind::Stack), stack()),
            Ok(RenderAction::UpdateTop {
                navigation_bar: Some(navigation_bar(NavigationBarTitle::text("Inbox")))
            })
        );
        assert_eq!(
            decide_render_with_root(Some(AttachmentKind::Single), stack()),
            Ok(RenderAction::Attach(stack())),
            "changing shape attaches afresh"
        );
        assert_eq!(
            decide_render_with_root(None, RootComponent::<()>::Simple),
            Ok(RenderAction::Attach(RootComponent::Simple))
        );

        assert_eq!(
            decide_render::<()>(Some(AttachmentKind::Stack)),
            RenderAction::UpdateTop {
                navigation_bar: None
            },
            "a bare render keeps the stack’s navigation bar"
        );
        assert_eq!(
            decide_render::<()>(Some(AttachmentKind::Single)),
            RenderAction::UpdateSingle
        );
        assert_eq!(
            decide_render::<()>(None),
            RenderAction::Attach(RootComponent::Simple)
        );
    }
}
