//! Attached screens and navigation stacks.

use crate::decision::AttachmentKind;
use crate::mailbox::Mailbox;
use crate::platform::Native;
use core::fmt;
use roost_core::navigation::NavigationBar;
use roost_core::Component;
use uuid::Uuid;

/// Identifies a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(Uuid);

impl ScreenId {
    pub(crate) fn new() -> ScreenId {
        ScreenId(Uuid::new_v4())
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "screen {}", self.0)
    }
}

/// Identifies an attachment (a root or a modally presented single screen or stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    pub(crate) fn new() -> AttachmentId {
        AttachmentId(Uuid::new_v4())
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "attachment {}", self.0)
    }
}

/// A screen showing a component tree.
///
/// `R` is the platform’s native screen handle.
#[derive(Debug)]
pub struct Screen<M, R> {
    id: ScreenId,
    component: Component<M>,
    mailbox: Mailbox<M>,
    navigation_bar: Option<NavigationBar<M>>,
    native: R,
}

impl<M, R> Screen<M, R> {
    pub(crate) fn new(
        id: ScreenId,
        component: Component<M>,
        mailbox: Mailbox<M>,
        native: R,
    ) -> Screen<M, R> {
        Screen {
            id,
            component,
            mailbox,
            navigation_bar: None,
            native,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// The component tree that was last rendered into this screen.
    pub fn component(&self) -> &Component<M> {
        &self.component
    }

    /// Messages fired by the screen’s components.
    pub fn mailbox(&self) -> &Mailbox<M> {
        &self.mailbox
    }

    /// The navigation bar this screen shows while it’s on a stack.
    pub fn navigation_bar(&self) -> Option<&NavigationBar<M>> {
        self.navigation_bar.as_ref()
    }

    pub fn native(&self) -> &R {
        &self.native
    }

    pub(crate) fn native_mut(&mut self) -> &mut R {
        &mut self.native
    }

    pub(crate) fn set_component(&mut self, component: Component<M>) {
        self.component = component;
    }

    pub(crate) fn set_navigation_bar(&mut self, navigation_bar: NavigationBar<M>) {
        self.navigation_bar = Some(navigation_bar);
    }
}

/// A navigation stack. Always contains at least its root screen.
///
/// `S` is the platform’s native stack handle.
#[derive(Debug)]
pub struct NavigationStack<M, S, R> {
    native: S,
    mailbox: Mailbox<M>,
    root: Screen<M, R>,
    pushed: Vec<Screen<M, R>>,
}

impl<M: Clone + Send + 'static, S, R> NavigationStack<M, S, R> {
    /// Creates a stack around its root screen, which must already carry its navigation bar.
    pub(crate) fn new(native: S, root: Screen<M, R>) -> NavigationStack<M, S, R> {
        let mailbox = Mailbox::new();
        root.mailbox().forward(&mailbox);
        NavigationStack {
            native,
            mailbox,
            root,
            pushed: Vec::new(),
        }
    }

    /// Pushes a screen and forwards its messages into the stack’s mailbox.
    pub(crate) fn push(&mut self, screen: Screen<M, R>) {
        screen.mailbox().forward(&self.mailbox);
        self.pushed.push(screen);
    }
}

impl<M, S, R> NavigationStack<M, S, R> {
    /// Messages fired by any screen on the stack.
    pub fn mailbox(&self) -> &Mailbox<M> {
        &self.mailbox
    }

    /// The bottom-most screen.
    pub fn root(&self) -> &Screen<M, R> {
        &self.root
    }

    pub fn top(&self) -> &Screen<M, R> {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Pops the top screen. The root screen is never popped.
    pub(crate) fn pop(&mut self) -> Option<Screen<M, R>> {
        self.pushed.pop()
    }

    /// Number of screens, including the root. Never zero.
    pub fn len(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Screens from the root to the top.
    pub fn screens(&self) -> impl Iterator<Item = &Screen<M, R>> {
        std::iter::once(&self.root).chain(self.pushed.iter())
    }

    pub fn native(&self) -> &S {
        &self.native
    }

    /// The native stack and the top screen, borrowed together.
    pub(crate) fn native_and_top_mut(&mut self) -> (&mut S, &mut Screen<M, R>) {
        let top = match self.pushed.last_mut() {
            Some(screen) => screen,
            None => &mut self.root,
        };
        (&mut self.native, top)
    }
}

#[derive(Debug)]
pub enum Mount<M, S, R> {
    Single(Screen<M, R>),
    Stack(NavigationStack<M, S, R>),
}

/// Something attached to the display: the root, or a modally presented screen or stack.
#[derive(Debug)]
pub struct Attachment<M, S, R> {
    id: AttachmentId,
    mount: Mount<M, S, R>,
}

impl<M, S, R> Attachment<M, S, R> {
    pub(crate) fn new(mount: Mount<M, S, R>) -> Attachment<M, S, R> {
        Attachment {
            id: AttachmentId::new(),
            mount,
        }
    }

    pub fn id(&self) -> AttachmentId {
        self.id
    }

    pub fn kind(&self) -> AttachmentKind {
        match self.mount {
            Mount::Single(_) => AttachmentKind::Single,
            Mount::Stack(_) => AttachmentKind::Stack,
        }
    }

    pub fn mount(&self) -> &Mount<M, S, R> {
        &self.mount
    }

    pub(crate) fn mount_mut(&mut self) -> &mut Mount<M, S, R> {
        &mut self.mount
    }

    /// Messages fired by anything in this attachment.
    pub fn mailbox(&self) -> &Mailbox<M> {
        match &self.mount {
            Mount::Single(screen) => screen.mailbox(),
            Mount::Stack(stack) => stack.mailbox(),
        }
    }

    /// The screen currently visible in this attachment.
    pub fn top_screen(&self) -> &Screen<M, R> {
        match &self.mount {
            Mount::Single(screen) => screen,
            Mount::Stack(stack) => stack.top(),
        }
    }

    pub(crate) fn native(&self) -> Native<'_, S, R> {
        match &self.mount {
            Mount::Single(screen) => Native::Screen(screen.native()),
            Mount::Stack(stack) => Native::Stack(stack.native()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_core::components::label::label;
    use roost_core::navigation::{navigation_bar, NavigationBarTitle};

    fn screen(text: &str) -> Screen<u32, ()> {
        let mut screen = Screen::new(ScreenId::new(), label(text), Mailbox::new(), ());
        screen.set_navigation_bar(navigation_bar(NavigationBarTitle::text(text)));
        screen
    }

    #[test]
    fn stack_never_pops_its_root() {
        let mut stack: NavigationStack<u32, (), ()> = NavigationStack::new((), screen("root"));
        let root_id = stack.root().id();
        assert_eq!(stack.len(), 1);
        assert!(stack.pop().is_none(), "the root screen shouldn’t be popped");
        assert_eq!(stack.top().id(), root_id);

        let pushed = screen("details");
        let pushed_id = pushed.id();
        stack.push(pushed);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().id(), pushed_id);
        assert_eq!(
            stack.screens().map(Screen::id).collect::<Vec<_>>(),
            vec![root_id, pushed_id]
        );

        assert_eq!(stack.pop().map(|screen| screen.id()), Some(pushed_id));
        assert_eq!(stack.top().id(), root_id);
    }

    #[test]
    fn stack_mailbox_collects_screen_messages() {
        let root = screen("root");
        let root_mailbox = root.mailbox().clone();
        let mut stack: NavigationStack<u32, (), ()> = NavigationStack::new((), root);
        let pushed = screen("details");
        let pushed_mailbox = pushed.mailbox().clone();
        stack.push(pushed);

        let attachment = Attachment::new(Mount::Stack(stack));
        assert_eq!(attachment.kind(), AttachmentKind::Stack);
        let received = attachment.mailbox().subscribe();

        root_mailbox.dispatch(1);
        pushed_mailbox.dispatch(2);
        assert_eq!(received.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
